//! JSON file store for [`History`].
//!
//! The whole list is rewritten on every change. A file that cannot be parsed
//! is logged and treated as an empty history.

use std::path::{Path, PathBuf};
use std::time::Duration;
use swarm_domain::{AgentResult, History, HistoryEntry, format_processing_time};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("history I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("history serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// History store backed by a single JSON file.
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored history; missing or corrupt files yield an empty list.
    pub fn load(&self) -> Result<History, HistoryError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(History::new()),
            Err(source) => {
                return Err(HistoryError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        match serde_json::from_str(&raw) {
            Ok(history) => Ok(history),
            Err(e) => {
                warn!(
                    "Ignoring corrupt history file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(History::new())
            }
        }
    }

    pub fn save(&self, history: &History) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| HistoryError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(history)?;
        std::fs::write(&self.path, json).map_err(|source| HistoryError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Record a finished analysis; returns whether it was added.
    pub fn record(&self, entry: HistoryEntry) -> Result<bool, HistoryError> {
        let mut history = self.load()?;
        if !history.record(entry) {
            debug!("Query already in history, not recording");
            return Ok(false);
        }
        self.save(&history)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<(), HistoryError> {
        self.save(&History::new())
    }

    /// Build an entry stamped with the current time.
    pub fn entry(
        query: impl Into<String>,
        agent_responses: Vec<AgentResult>,
        final_recommendation: impl Into<String>,
        elapsed: Option<Duration>,
    ) -> HistoryEntry {
        let timestamp = chrono::Utc::now().timestamp_millis();
        HistoryEntry {
            id: timestamp.to_string(),
            query: query.into(),
            timestamp,
            agent_responses,
            final_recommendation: final_recommendation.into(),
            processing_time: elapsed.map(format_processing_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_domain::HISTORY_LIMIT;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> JsonHistoryStore {
        JsonHistoryStore::new(dir.path().join("nested").join("history.json"))
    }

    fn entry(query: &str) -> HistoryEntry {
        JsonHistoryStore::entry(query, Vec::new(), "Go for it. 8/10", None)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).load().unwrap().is_empty());
    }

    #[test]
    fn test_record_and_reload() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        assert!(store.record(entry("first")).unwrap());
        assert!(store.record(entry("second")).unwrap());

        let history = store.load().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].query, "second");
        assert_eq!(history.entries()[1].query, "first");
    }

    #[test]
    fn test_duplicate_query_not_recorded() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        assert!(store.record(entry("same")).unwrap());
        assert!(!store.record(entry("same")).unwrap());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_capped_at_limit() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        for i in 0..HISTORY_LIMIT + 3 {
            store.record(entry(&format!("query {}", i))).unwrap();
        }

        let history = store.load().unwrap();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.entries()[0].query, format!("query {}", HISTORY_LIMIT + 2));
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{ not json").unwrap();

        assert!(store.load().unwrap().is_empty());
        assert!(store.record(entry("fresh")).unwrap());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.record(entry("a")).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_uses_camel_case_fields() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store
            .record(JsonHistoryStore::entry(
                "q",
                Vec::new(),
                "rec",
                Some(Duration::from_millis(12_400)),
            ))
            .unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"finalRecommendation\""));
        assert!(raw.contains("\"processingTime\": \"12.4\""));
    }
}
