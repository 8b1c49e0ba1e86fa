//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on use.

mod followups;
mod gateway;
mod history;
mod server;

pub use followups::FileFollowupsConfig;
pub use gateway::FileGatewayConfig;
pub use history::FileHistoryConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use swarm_domain::ConfigIssue;
use thiserror::Error;

/// Configuration rejected at startup
#[derive(Error, Debug)]
#[error("invalid configuration: {}", summarize(.issues))]
pub struct ConfigValidationError {
    pub issues: Vec<ConfigIssue>,
}

fn summarize(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion gateway settings
    pub gateway: FileGatewayConfig,
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Follow-up suggestion settings
    pub followups: FileFollowupsConfig,
    /// Client-local history
    pub history: FileHistoryConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.gateway.validate());
        issues.extend(self.server.validate());
        issues.extend(self.followups.validate());
        issues
    }

    /// Split issues into a hard failure (any error) or the remaining warnings.
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError { issues: errors })
        }
    }
}
