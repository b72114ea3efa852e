//! Static routing from dotted configuration keys to environment variables

use snapenv_core::{
    Error, Result, SERVICE_DATA, SERVICE_DEVICE_VIRTUAL, SERVICE_NOTIFICATIONS, SERVICE_PROXY,
    SERVICE_SECRET_STORE,
};
use std::collections::HashMap;

/// The set of services a routed environment variable applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every service in the run's service list
    All,
    /// An explicit set of service keys
    Services(&'static [&'static str]),
}

impl Scope {
    pub fn includes(&self, service: &str) -> bool {
        match self {
            Scope::All => true,
            Scope::Services(services) => services.contains(&service),
        }
    }
}

/// One routing target: the environment variable a configuration key sets
/// and the services it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTarget {
    pub scope: Scope,
    pub env_var: &'static str,
}

impl RouteTarget {
    #[must_use]
    pub const fn all(env_var: &'static str) -> Self {
        Self {
            scope: Scope::All,
            env_var,
        }
    }

    #[must_use]
    pub const fn scoped(services: &'static [&'static str], env_var: &'static str) -> Self {
        Self {
            scope: Scope::Services(services),
            env_var,
        }
    }
}

/// Immutable mapping from dotted configuration keys to routing targets.
///
/// Built once at startup ([`RouteTable::builtin`]) and passed explicitly
/// wherever routing happens; substitute tables can be injected in tests
/// via [`RouteTable::from_entries`]. A key may carry several targets.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: HashMap<&'static str, Vec<RouteTarget>>,
}

// Message-bus settings only apply to the services that publish to or
// subscribe from the bus.
const MESSAGE_BUS_SERVICES: &[&str] = &[SERVICE_DATA, SERVICE_DEVICE_VIRTUAL];

impl RouteTable {
    pub fn from_entries(
        entries: impl IntoIterator<Item = (&'static str, Vec<RouteTarget>)>,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The platform's full key mapping.
    ///
    /// The syntax of a routable key is `<section>.<setting>` matching the
    /// service configuration file layout; a few top-level keys route to
    /// setup-service environment variables rather than config overrides.
    pub fn builtin() -> Self {
        Self::from_entries([
            // [Service]
            (
                "service.health-check-interval",
                vec![RouteTarget::all("SERVICE_HEALTHCHECKINTERVAL")],
            ),
            ("service.host", vec![RouteTarget::all("SERVICE_HOST")]),
            ("service.port", vec![RouteTarget::all("SERVICE_PORT")]),
            (
                "service.server-bind-addr",
                vec![RouteTarget::all("SERVICE_SERVERBINDADDR")],
            ),
            (
                "service.startup-msg",
                vec![RouteTarget::all("SERVICE_STARTUPMSG")],
            ),
            (
                "service.max-result-count",
                vec![RouteTarget::all("SERVICE_MAXRESULTCOUNT")],
            ),
            (
                "service.max-request-size",
                vec![RouteTarget::all("SERVICE_MAXREQUESTSIZE")],
            ),
            (
                "service.request-timeout",
                vec![RouteTarget::all("SERVICE_REQUESTTIMEOUT")],
            ),
            // [Clients]
            (
                "clients.command.port",
                vec![RouteTarget::all("CLIENTS_COMMAND_PORT")],
            ),
            (
                "clients.coredata.port",
                vec![RouteTarget::all("CLIENTS_COREDATA_PORT")],
            ),
            // device services use a different client key for the same port
            (
                "clients.data.port",
                vec![RouteTarget::all("CLIENTS_DATA_PORT")],
            ),
            (
                "clients.metadata.port",
                vec![RouteTarget::all("CLIENTS_METADATA_PORT")],
            ),
            (
                "clients.notifications.port",
                vec![RouteTarget::all("CLIENTS_NOTIFICATIONS_PORT")],
            ),
            (
                "clients.scheduler.port",
                vec![RouteTarget::all("CLIENTS_SCHEDULER_PORT")],
            ),
            // [MessageQueue]
            (
                "messagequeue.type",
                vec![RouteTarget::scoped(MESSAGE_BUS_SERVICES, "MESSAGEQUEUE_TYPE")],
            ),
            (
                "messagequeue.protocol",
                vec![RouteTarget::scoped(
                    MESSAGE_BUS_SERVICES,
                    "MESSAGEQUEUE_PROTOCOL",
                )],
            ),
            (
                "messagequeue.host",
                vec![RouteTarget::scoped(MESSAGE_BUS_SERVICES, "MESSAGEQUEUE_HOST")],
            ),
            (
                "messagequeue.port",
                vec![RouteTarget::scoped(MESSAGE_BUS_SERVICES, "MESSAGEQUEUE_PORT")],
            ),
            (
                "messagequeue.publish-topic-prefix",
                vec![RouteTarget::scoped(
                    MESSAGE_BUS_SERVICES,
                    "MESSAGEQUEUE_PUBLISHTOPICPREFIX",
                )],
            ),
            (
                "messagequeue.subscribe-topic",
                vec![RouteTarget::scoped(
                    MESSAGE_BUS_SERVICES,
                    "MESSAGEQUEUE_SUBSCRIBETOPIC",
                )],
            ),
            (
                "messagequeue.auth-mode",
                vec![RouteTarget::scoped(
                    MESSAGE_BUS_SERVICES,
                    "MESSAGEQUEUE_AUTHMODE",
                )],
            ),
            (
                "messagequeue.secret-name",
                vec![RouteTarget::scoped(
                    MESSAGE_BUS_SERVICES,
                    "MESSAGEQUEUE_SECRETNAME",
                )],
            ),
            (
                "messagequeue.subscribe-enabled",
                vec![RouteTarget::scoped(
                    MESSAGE_BUS_SERVICES,
                    "MESSAGEQUEUE_SUBSCRIBEENABLED",
                )],
            ),
            // [SecretStore]
            (
                "secretstore.additional-retry-attempts",
                vec![RouteTarget::all("SECRETSTORE_ADDITIONALRETRYATTEMPTS")],
            ),
            (
                "secretstore.retry-wait-period",
                vec![RouteTarget::all("SECRETSTORE_RETRYWAITPERIOD")],
            ),
            // [Smtp]
            (
                "smtp.host",
                vec![RouteTarget::scoped(&[SERVICE_NOTIFICATIONS], "SMTP_HOST")],
            ),
            (
                "smtp.username",
                vec![RouteTarget::scoped(&[SERVICE_NOTIFICATIONS], "SMTP_USERNAME")],
            ),
            (
                "smtp.password",
                vec![RouteTarget::scoped(&[SERVICE_NOTIFICATIONS], "SMTP_PASSWORD")],
            ),
            (
                "smtp.port",
                vec![RouteTarget::scoped(&[SERVICE_NOTIFICATIONS], "SMTP_PORT")],
            ),
            (
                "smtp.sender",
                vec![RouteTarget::scoped(&[SERVICE_NOTIFICATIONS], "SMTP_SENDER")],
            ),
            (
                "smtp.enable-self-signed-cert",
                vec![RouteTarget::scoped(
                    &[SERVICE_NOTIFICATIONS],
                    "SMTP_ENABLE_SELF_SIGNED_CERT",
                )],
            ),
            (
                "smtp.subject",
                vec![RouteTarget::scoped(&[SERVICE_NOTIFICATIONS], "SMTP_SUBJECT")],
            ),
            // credentials are stored via the secrets API under this path
            (
                "smtp.secret-path",
                vec![RouteTarget::scoped(&[SERVICE_NOTIFICATIONS], "SMTP_SECRETPATH")],
            ),
            (
                "smtp.auth-mode",
                vec![RouteTarget::scoped(&[SERVICE_NOTIFICATIONS], "SMTP_AUTHMODE")],
            ),
            // Top-level keys consumed by the security setup services; these
            // are not configuration overrides but env vars of their own.
            (
                "add-proxy-route",
                vec![RouteTarget::scoped(&[SERVICE_PROXY], "ADD_PROXY_ROUTE")],
            ),
            (
                "kongauth.name",
                vec![RouteTarget::scoped(&[SERVICE_PROXY], "KONGAUTH_NAME")],
            ),
            (
                "add-secretstore-tokens",
                vec![RouteTarget::scoped(
                    &[SERVICE_SECRET_STORE],
                    "ADD_SECRETSTORE_TOKENS",
                )],
            ),
        ])
    }

    /// Resolve a flattened key to its routing targets.
    pub fn route(&self, key: &str) -> Result<&[RouteTarget]> {
        self.entries
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::unroutable_key(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}
