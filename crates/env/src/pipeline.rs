//! The option resolution pipeline
//!
//! One run moves through fixed phases in order, failing fast: the
//! config-enabled gate, legacy migration, legacy-namespace clearing, the
//! global pass (replace baseline), and the app-specific pass (merge
//! layering, higher precedence).

use snapenv_config::{flatten, ConfigTree, RouteTable, RouteTarget, SnapOptions};
use snapenv_core::{
    Error, Result, APP_CONFIG_OPTION, APP_OPTIONS_KEY, CONFIG_ENABLED_KEY, GLOBAL_OPTIONS_KEY,
    LEGACY_OPTIONS_KEY,
};
use snapenv_snapctl::SettingsStore;
use std::path::PathBuf;

use crate::custom::CustomOptions;
use crate::migrate::migrate_legacy_options;
use crate::overrides::OverrideFile;

/// A routed assignment still carrying its scope; applied per service.
struct Assignment {
    target: RouteTarget,
    value: String,
}

/// One run of the option → override-file compiler.
pub struct Processor<'a, S> {
    store: &'a S,
    routes: &'a RouteTable,
    custom: CustomOptions,
    res_dir: PathBuf,
}

impl<'a, S: SettingsStore> Processor<'a, S> {
    pub fn new(store: &'a S, routes: &'a RouteTable, res_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            routes,
            custom: CustomOptions::builtin(),
            res_dir: res_dir.into(),
        }
    }

    /// Process the snap's `config.` and `apps.` options into per-service
    /// override files.
    ///
    /// Global settings (`config.<key>`) apply to every service in
    /// `services`; app-specific settings (`apps.<service>.config.<key>`)
    /// apply to one service and win on collision. Custom non-config app
    /// options dispatch to their named handlers.
    pub fn process_app_config(&self, services: &[String]) -> Result<()> {
        if services.is_empty() {
            return Err(Error::EmptyServiceList);
        }

        let enabled = self.store.get(CONFIG_ENABLED_KEY)? == "true";
        tracing::info!(enabled, "processing apps.* and config.* options");

        if !enabled {
            return self.reject_if_options_set();
        }

        migrate_legacy_options(self.store)?;

        // The deprecated namespace must never coexist with new-style
        // options.
        self.store.unset(LEGACY_OPTIONS_KEY)?;
        tracing::info!("unset all 'env.' options");

        self.global_pass(services)?;
        // App-specific options are processed last so they land on top of
        // the global baseline.
        self.app_pass(services)
    }

    /// Back-compat path: with the gate off, succeed quietly unless
    /// new-style options are already set.
    fn reject_if_options_set(&self) -> Result<()> {
        let apps = self.store.get(APP_OPTIONS_KEY)?;
        let global = self.store.get(GLOBAL_OPTIONS_KEY)?;
        if is_set(&apps) || is_set(&global) {
            return Err(Error::ConfigNotEnabled);
        }
        tracing::debug!("no config options are set");
        Ok(())
    }

    fn global_pass(&self, services: &[String]) -> Result<()> {
        let document = self.store.get_document(GLOBAL_OPTIONS_KEY)?;
        let options = SnapOptions::from_document(GLOBAL_OPTIONS_KEY, &document)?;
        let tree = match options.config {
            Some(tree) => tree,
            None => {
                // An absent document still rewrites every file with an
                // empty baseline.
                tracing::debug!("no global configuration settings");
                ConfigTree::new()
            }
        };

        let assignments = self.route_tree(&tree)?;
        for service in services {
            let mut overrides = OverrideFile::new(&self.res_dir, service);
            apply_scoped(&mut overrides, &assignments, service);
            overrides.write(false)?;
        }
        Ok(())
    }

    fn app_pass(&self, services: &[String]) -> Result<()> {
        let document = self.store.get_document(APP_OPTIONS_KEY)?;
        let options = SnapOptions::from_document(APP_OPTIONS_KEY, &document)?;

        for service in services {
            let Some(app) = options.app(service) else {
                continue;
            };
            tracing::debug!(service = %service, "processing app options");

            for (option, tree) in app {
                if option == APP_CONFIG_OPTION {
                    let assignments = self.route_tree(tree)?;
                    let mut overrides = OverrideFile::new(&self.res_dir, service);
                    apply_scoped(&mut overrides, &assignments, service);
                    overrides.write(true)?;
                } else {
                    self.custom.dispatch(&self.res_dir, service, option, tree)?;
                }
            }
        }
        Ok(())
    }

    /// Process only the custom (non-config) options of one service.
    pub fn process_custom_options(&self, service: &str) -> Result<()> {
        let document = self.store.get_document(APP_OPTIONS_KEY)?;
        let options = SnapOptions::from_document(APP_OPTIONS_KEY, &document)?;

        tracing::debug!(service = %service, "processing custom options");
        let Some(app) = options.app(service) else {
            return Ok(());
        };
        for (option, tree) in app {
            if option != APP_CONFIG_OPTION {
                self.custom.dispatch(&self.res_dir, service, option, tree)?;
            }
        }
        Ok(())
    }

    /// Flatten and route a tree; the first unroutable key fails the pass
    /// before any file is written.
    fn route_tree(&self, tree: &ConfigTree) -> Result<Vec<Assignment>> {
        let mut assignments = Vec::new();
        for entry in flatten(tree)? {
            for target in self.routes.route(&entry.path)? {
                assignments.push(Assignment {
                    target: *target,
                    value: entry.value.clone(),
                });
            }
        }
        Ok(assignments)
    }
}

fn apply_scoped(overrides: &mut OverrideFile, assignments: &[Assignment], service: &str) {
    for assignment in assignments {
        if assignment.target.scope.includes(service) {
            overrides.set_variable(assignment.target.env_var, assignment.value.clone());
        }
    }
}

/// A value counts as set unless it is empty or the empty document.
fn is_set(value: &str) -> bool {
    !(value.is_empty() || value == "{}")
}
