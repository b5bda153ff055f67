//! Preference store
//!
//! A small key-value store for UI preferences, backed by a JSON string map
//! in the XDG config directory. Reads and writes never propagate errors:
//! a missing file, unparsable contents, or a failed write all degrade to
//! "no stored value" / "write skipped", leaving in-memory state as the
//! source of truth for the session.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// File-backed preference store with never-throw semantics.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Open the store at its default location
    /// (`<config_dir>/redditpains/prefs.json`).
    pub fn open_default() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("redditpains")
            .join("prefs.json");
        Self { path }
    }

    /// Open a store backed by a specific file (used by tests).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read a stored value. Returns `None` for missing keys and for any
    /// underlying storage failure.
    pub fn read(&self, key: &str) -> Option<String> {
        let map = self.load_map()?;
        map.get(key).cloned()
    }

    /// Write a value. A failed write is silently skipped; it is not
    /// reattempted until the next natural state change writes again.
    pub fn write(&self, key: &str, value: &str) {
        let mut map = self.load_map().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                log::debug!("prefs: could not create {}", parent.display());
                return;
            }
        }

        match serde_json::to_string_pretty(&map) {
            Ok(contents) => {
                if std::fs::write(&self.path, contents).is_err() {
                    log::debug!("prefs: write to {} skipped", self.path.display());
                }
            }
            Err(e) => log::debug!("prefs: serialization failed: {e}"),
        }
    }

    fn load_map(&self) -> Option<BTreeMap<String, String>> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(map) => Some(map),
            Err(e) => {
                log::debug!("prefs: ignoring unparsable {}: {e}", self.path.display());
                None
            }
        }
    }
}
