//! Client-local history configuration from TOML (`[history]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// History file; defaults to `$XDG_DATA_HOME/decision-swarm/history.json`
    pub path: Option<PathBuf>,
}

impl FileHistoryConfig {
    pub fn resolve_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(|| {
            dirs::data_dir().map(|d| d.join("decision-swarm").join("history.json"))
        })
    }
}
