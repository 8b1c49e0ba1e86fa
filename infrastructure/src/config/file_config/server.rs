//! HTTP server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use swarm_domain::{ConfigIssue, ConfigIssueCode};

/// Server configuration from TOML
///
/// # Example
///
/// ```toml
/// [server]
/// bind = "127.0.0.1:8787"
/// allowed_origin = "*"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub bind: String,
    /// CORS origin; `*` allows any
    pub allowed_origin: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8787".to_string(),
            allowed_origin: "*".to_string(),
        }
    }
}

impl FileServerConfig {
    pub fn bind_addr(&self) -> Option<SocketAddr> {
        self.bind.parse().ok()
    }

    /// Origin to allow, with an empty value treated as `*`
    pub fn origin(&self) -> &str {
        if self.allowed_origin.trim().is_empty() {
            "*"
        } else {
            self.allowed_origin.trim()
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.bind_addr().is_none() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidAddress {
                    field: "server.bind".to_string(),
                    value: self.bind.clone(),
                },
                format!("server.bind: '{}' is not a socket address", self.bind),
            ));
        }

        if self.allowed_origin.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "server.allowed_origin".to_string(),
                },
                "server.allowed_origin: empty, falling back to '*'",
            ));
        }

        issues
    }
}
