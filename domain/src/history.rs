//! Client-local analysis history.
//!
//! A short most-recent-first list, deduplicated by exact query text. The
//! first stored run of a query is kept; re-running it does not replace it.

use crate::agent::result::AgentResult;
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept
pub const HISTORY_LIMIT: usize = 10;

/// One completed analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub query: String,
    /// Unix epoch milliseconds
    pub timestamp: i64,
    pub agent_responses: Vec<AgentResult>,
    pub final_recommendation: String,
    /// Formatted wall-clock duration, e.g. `"12.4s"`
    pub processing_time: Option<String>,
}

/// Ordered history list, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_query(&self, query: &str) -> bool {
        self.entries.iter().any(|e| e.query == query)
    }

    /// Prepend `entry` unless its query is already recorded.
    ///
    /// Returns whether the entry was added.
    pub fn record(&mut self, entry: HistoryEntry) -> bool {
        if self.contains_query(&entry.query) {
            return false;
        }
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Format a duration the way history entries store it: seconds to one
/// decimal, without a unit.
pub fn format_processing_time(elapsed: std::time::Duration) -> String {
    format!("{:.1}", elapsed.as_secs_f64())
}
