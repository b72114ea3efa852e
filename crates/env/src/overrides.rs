//! Per-service environment override files
//!
//! Each service sources `<service>.env` before launch; this module owns
//! the in-memory representation of one such file and its persistence.

use indexmap::IndexMap;
use snapenv_core::{Error, Result, ENV_FILE_EXTENSION};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Ordered `NAME=value` assignments destined for one service's override
/// file. Later writes to the same name win within a run.
#[derive(Debug)]
pub struct OverrideFile {
    service: String,
    res_dir: PathBuf,
    path: PathBuf,
    vars: IndexMap<String, String>,
}

impl OverrideFile {
    pub fn new(res_dir: &Path, service: &str) -> Self {
        let path = res_dir.join(format!("{service}.{ENV_FILE_EXTENSION}"));
        Self {
            service: service.to_string(),
            res_dir: res_dir.to_path_buf(),
            path,
            vars: IndexMap::new(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Upsert one assignment; the last call for a given name wins.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Persist the assignments.
    ///
    /// With `merge` the current file contents are read first and the
    /// in-memory assignments overlaid on top (in-memory wins on
    /// collision); without it the assignments replace the file entirely.
    /// The file is replaced atomically; on failure the prior contents
    /// stay untouched.
    pub fn write(&self, merge: bool) -> Result<()> {
        let vars = if merge {
            let mut merged = read_env_file(&self.path)?;
            for (name, value) in &self.vars {
                merged.insert(name.clone(), value.clone());
            }
            merged
        } else {
            self.vars.clone()
        };

        fs::create_dir_all(&self.res_dir)
            .map_err(|e| Error::file_io(&self.res_dir, "create directory", e))?;

        let mut rendered = String::new();
        for (name, value) in &vars {
            rendered.push_str(name);
            rendered.push('=');
            rendered.push_str(value);
            rendered.push('\n');
        }

        let mut tmp = NamedTempFile::new_in(&self.res_dir)
            .map_err(|e| Error::file_io(&self.path, "create temp file", e))?;
        tmp.write_all(rendered.as_bytes())
            .map_err(|e| Error::file_io(&self.path, "write", e))?;
        tmp.persist(&self.path)
            .map_err(|e| Error::file_io(&self.path, "replace", e.error))?;

        tracing::debug!(
            service = %self.service,
            path = %self.path.display(),
            merge,
            count = vars.len(),
            "wrote override file"
        );
        Ok(())
    }
}

/// Read an override file back into an ordered map. An absent file is an
/// empty map. Blank lines are ignored; a line without `=` cannot have
/// been written by us and is skipped with a warning.
fn read_env_file(path: &Path) -> Result<IndexMap<String, String>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(IndexMap::new()),
        Err(e) => return Err(Error::file_io(path, "read", e)),
    };

    let mut vars = IndexMap::new();
    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match line.split_once('=') {
            Some((name, value)) => {
                vars.insert(name.to_string(), value.to_string());
            }
            None => {
                tracing::warn!(path = %path.display(), line, "skipping malformed override line");
            }
        }
    }
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn contents(file: &OverrideFile) -> String {
        fs::read_to_string(file.path()).unwrap()
    }

    #[test]
    fn file_is_named_after_the_service() {
        let dir = tempdir().unwrap();
        let file = OverrideFile::new(dir.path(), "core-data");
        assert_eq!(file.path(), dir.path().join("core-data.env"));
        assert_eq!(file.service(), "core-data");
    }

    #[test]
    fn replace_discards_prior_contents() {
        let dir = tempdir().unwrap();

        let mut file = OverrideFile::new(dir.path(), "core-data");
        file.set_variable("SERVICE_PORT", "8080");
        file.set_variable("SERVICE_HOST", "localhost");
        file.write(false).unwrap();

        let mut file = OverrideFile::new(dir.path(), "core-data");
        file.set_variable("SERVICE_PORT", "9999");
        file.write(false).unwrap();

        assert_eq!(contents(&file), "SERVICE_PORT=9999\n");
    }

    #[test]
    fn merge_overlays_on_top_of_existing_contents() {
        let dir = tempdir().unwrap();

        let mut file = OverrideFile::new(dir.path(), "core-data");
        file.set_variable("SERVICE_PORT", "8080");
        file.set_variable("SERVICE_HOST", "localhost");
        file.write(false).unwrap();

        let mut file = OverrideFile::new(dir.path(), "core-data");
        file.set_variable("SERVICE_PORT", "9999");
        file.set_variable("SERVICE_STARTUPMSG", "ready");
        file.write(true).unwrap();

        // existing keys keep their position, new keys append
        assert_eq!(
            contents(&file),
            "SERVICE_PORT=9999\nSERVICE_HOST=localhost\nSERVICE_STARTUPMSG=ready\n"
        );
    }

    #[test]
    fn merge_is_idempotent() {
        let dir = tempdir().unwrap();

        let mut baseline = OverrideFile::new(dir.path(), "core-data");
        baseline.set_variable("SERVICE_HOST", "localhost");
        baseline.write(false).unwrap();

        let mut file = OverrideFile::new(dir.path(), "core-data");
        file.set_variable("SERVICE_PORT", "9999");
        file.write(true).unwrap();
        let once = contents(&file);
        file.write(true).unwrap();
        assert_eq!(contents(&file), once);
    }

    #[test]
    fn later_sets_win_within_a_run() {
        let dir = tempdir().unwrap();
        let mut file = OverrideFile::new(dir.path(), "core-data");
        file.set_variable("SERVICE_PORT", "8080");
        file.set_variable("SERVICE_PORT", "9999");
        file.write(false).unwrap();
        assert_eq!(contents(&file), "SERVICE_PORT=9999\n");
    }

    #[test]
    fn empty_store_writes_an_empty_file() {
        let dir = tempdir().unwrap();
        let file = OverrideFile::new(dir.path(), "core-data");
        file.write(false).unwrap();
        assert_eq!(contents(&file), "");
    }

    #[test]
    fn merge_tolerates_hand_edited_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("core-data.env");
        fs::write(&path, "SERVICE_HOST=localhost\n\nnot a variable\n").unwrap();

        let mut file = OverrideFile::new(dir.path(), "core-data");
        file.set_variable("SERVICE_PORT", "9999");
        file.write(true).unwrap();

        assert_eq!(contents(&file), "SERVICE_HOST=localhost\nSERVICE_PORT=9999\n");
    }

    #[test]
    fn values_are_written_unquoted() {
        let dir = tempdir().unwrap();
        let mut file = OverrideFile::new(dir.path(), "support-notifications");
        file.set_variable("SMTP_SUBJECT", "alert: threshold crossed");
        file.write(false).unwrap();
        assert_eq!(contents(&file), "SMTP_SUBJECT=alert: threshold crossed\n");
    }
}
