//! Persisted recent-files history

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Sink for the list's final state at session end.
pub trait PersistenceWriter {
    /// Record the configured capacity. Returning `false` aborts the write;
    /// no entries follow.
    fn write_capacity(&mut self, capacity: usize) -> bool;

    /// Record one path. Called oldest first.
    fn write_entry(&mut self, path: &str);
}

/// On-disk recent-files history, saved as JSON under the platform config
/// directory.
///
/// `files` is ordered oldest first, matching what
/// [`RecentFileList::persist`](crate::RecentFileList::persist) emits, so the
/// vector can be replayed straight into
/// [`RecentFileList::restore`](crate::RecentFileList::restore).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RecentFileHistory {
    /// Configured capacity at the time of the save.
    #[serde(default)]
    pub max_entries: usize,
    /// Stored paths, oldest first.
    #[serde(default)]
    pub files: Vec<String>,
}

impl RecentFileHistory {
    /// History file location, e.g. `~/.config/rolodex/history.json`.
    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rolodex").join("history.json"))
    }

    /// Load from the platform config directory, or return defaults.
    #[must_use]
    pub fn load() -> Self {
        Self::default_path().map(Self::load_from).unwrap_or_default()
    }

    /// Load from an explicit path; a missing or malformed file yields
    /// defaults.
    #[must_use]
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save to the platform config directory.
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::default_path() {
            self.save_to(path)
        } else {
            tracing::warn!("no config directory; recent-files history not saved");
            Ok(())
        }
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

impl PersistenceWriter for RecentFileHistory {
    fn write_capacity(&mut self, capacity: usize) -> bool {
        self.max_entries = capacity;
        self.files.clear();
        true
    }

    fn write_entry(&mut self, path: &str) {
        self.files.push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let history = RecentFileHistory {
            max_entries: 12,
            files: vec!["/a".to_string(), "/b".to_string()],
        };
        history.save_to(&path).unwrap();

        assert_eq!(RecentFileHistory::load_from(&path), history);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let loaded = RecentFileHistory::load_from("/nonexistent/history.json");
        assert_eq!(loaded, RecentFileHistory::default());
    }

    #[test]
    fn test_malformed_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "not json").unwrap();

        assert_eq!(RecentFileHistory::load_from(&path), RecentFileHistory::default());
    }

    #[test]
    fn test_writer_resets_previous_contents() {
        let mut history = RecentFileHistory {
            max_entries: 4,
            files: vec!["/stale".to_string()],
        };

        assert!(history.write_capacity(8));
        history.write_entry("/fresh");
        assert_eq!(history.max_entries, 8);
        assert_eq!(history.files, ["/fresh"]);
    }
}
