//! Process-backed store implementation that runs `snapctl`

use crate::store::SettingsStore;
use snapenv_core::{Error, Result};
use std::process::Command;

const SNAPCTL_BIN: &str = "snapctl";

/// Store implementation backed by the `snapctl` binary available inside
/// snap hook and app contexts.
#[derive(Debug, Default)]
pub struct Snapctl;

impl Snapctl {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, args: &[&str]) -> std::result::Result<String, String> {
        let output = Command::new(SNAPCTL_BIN)
            .args(args)
            .output()
            .map_err(|e| format!("failed to run {SNAPCTL_BIN}: {e}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!(
                "{SNAPCTL_BIN} {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn run_read(&self, key: &str, args: &[&str]) -> Result<String> {
        self.run(args).map_err(|message| Error::store_read(key, message))
    }

    fn run_write(&self, key: &str, args: &[&str]) -> Result<()> {
        self.run(args)
            .map(|_| ())
            .map_err(|message| Error::store_write(key, message))
    }
}

impl SettingsStore for Snapctl {
    fn get(&self, key: &str) -> Result<String> {
        let value = self.run_read(key, &["get", key])?;
        tracing::debug!(key, value = %value, "snapctl get");
        Ok(value)
    }

    fn get_document(&self, key: &str) -> Result<String> {
        let document = self.run_read(key, &["get", "-d", key])?;
        tracing::debug!(key, "snapctl get -d");
        Ok(document)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let assignment = format!("{key}={value}");
        self.run_write(key, &["set", &assignment])?;
        tracing::debug!(key, "snapctl set");
        Ok(())
    }

    fn unset(&self, key: &str) -> Result<()> {
        self.run_write(key, &["unset", key])?;
        tracing::debug!(key, "snapctl unset");
        Ok(())
    }
}
