use std::{fs, io, path::PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::warn;

use crate::history::{SearchEntry, SearchHistory};

/// Failure while reading or writing the persisted history slot.
///
/// Never surfaced to the user: callers log it and keep the in-memory history
/// authoritative for the rest of the session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine platform data directory")]
    NoDataDir,

    #[error("failed to access history file")]
    Io(#[from] io::Error),

    #[error("failed to serialize history")]
    Serialize(#[from] serde_json::Error),
}

/// One on-disk slot holding the serialized search history as a JSON array
/// of `{city, time}` objects.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Store at the platform data directory, e.g.
    /// `~/.local/share/hava-cli/history.json` on Linux.
    pub fn open_default() -> Result<Self, StoreError> {
        let dirs =
            ProjectDirs::from("dev", "hava", "hava-cli").ok_or(StoreError::NoDataDir)?;

        Ok(Self::at(dirs.data_dir().join("history.json")))
    }

    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the persisted history. An absent slot, an unreadable file, or an
    /// unparseable body all yield an empty history rather than an error.
    pub fn load(&self) -> SearchHistory {
        if !self.path.exists() {
            return SearchHistory::new();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "could not read history file");
                return SearchHistory::new();
            }
        };

        match serde_json::from_str::<Vec<SearchEntry>>(&contents) {
            // Collecting re-applies the length and de-duplication invariants.
            Ok(entries) => entries.into_iter().collect(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "discarding unparseable history");
                SearchHistory::new()
            }
        }
    }

    /// Overwrite the slot with `history`, creating parent directories as
    /// needed.
    pub fn save(&self, history: &SearchHistory) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(history.entries())?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = HistoryStore::at(dir.path().join("history.json"));

        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = HistoryStore::at(dir.path().join("nested").join("history.json"));

        let mut history = SearchHistory::new();
        history.record(SearchEntry::new("Paris", "01.01 10:00"));
        history.record(SearchEntry::new("London", "01.01 11:00"));

        store.save(&history).expect("save");
        assert_eq!(store.load(), history);
    }

    #[test]
    fn load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json").expect("write");

        let store = HistoryStore::at(path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn persisted_form_is_a_plain_json_array() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = HistoryStore::at(dir.path().join("history.json"));

        let mut history = SearchHistory::new();
        history.record(SearchEntry::new("Paris", "01.01 10:00"));
        store.save(&history).expect("save");

        let raw = fs::read_to_string(store.path()).expect("read");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(
            value,
            serde_json::json!([{ "city": "Paris", "time": "01.01 10:00" }])
        );
    }

    #[test]
    fn save_into_unwritable_location_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A file where a directory is needed makes create_dir_all fail.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").expect("write");

        let store = HistoryStore::at(blocker.join("history.json"));
        let err = store.save(&SearchHistory::new()).unwrap_err();

        assert!(matches!(err, StoreError::Io(_)));
    }
}
