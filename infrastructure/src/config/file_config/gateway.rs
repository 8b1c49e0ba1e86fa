//! Completion gateway configuration from TOML (`[gateway]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use swarm_domain::{ConfigIssue, ConfigIssueCode};

/// Gateway configuration from TOML
///
/// # Example
///
/// ```toml
/// [gateway]
/// base_url = "https://ai.gateway.lovable.dev/v1"
/// api_key_env = "LOVABLE_API_KEY"    # Variable holding the bearer key
/// max_tokens = 600
/// temperature = 0.7
/// timeout_secs = 90                   # Per-call bound
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Base URL of the OpenAI-compatible endpoint, without `/chat/completions`
    pub base_url: String,
    /// Environment variable the key is read from
    pub api_key_env: String,
    /// Inline key; takes precedence over `api_key_env`
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ai.gateway.lovable.dev/v1".to_string(),
            api_key_env: "LOVABLE_API_KEY".to_string(),
            api_key: None,
            max_tokens: 600,
            temperature: 0.7,
            timeout_secs: 90,
        }
    }
}

impl FileGatewayConfig {
    /// Resolve the bearer key: inline value first, then the named variable.
    ///
    /// Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "gateway.base_url".to_string(),
                },
                "gateway.base_url: cannot be empty",
            ));
        }

        if self.api_key.is_none() && self.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyValue {
                    field: "gateway.api_key_env".to_string(),
                },
                "gateway.api_key_env: empty, every gateway call will fail",
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "gateway.temperature".to_string(),
                    value: self.temperature.to_string(),
                },
                format!(
                    "gateway.temperature: {} is outside 0..=2",
                    self.temperature
                ),
            ));
        }

        if self.max_tokens == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "gateway.max_tokens".to_string(),
                    value: "0".to_string(),
                },
                "gateway.max_tokens: cannot be 0",
            ));
        }

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "gateway.timeout_secs".to_string(),
                    value: "0".to_string(),
                },
                "gateway.timeout_secs: cannot be 0",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_key_wins() {
        let config = FileGatewayConfig {
            api_key: Some("inline".to_string()),
            api_key_env: "SWARM_TEST_UNSET_VARIABLE".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("inline"));
    }

    #[test]
    fn test_blank_key_is_absent() {
        let config = FileGatewayConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.resolve_api_key().is_none());
    }

    #[test]
    fn test_temperature_out_of_range() {
        let config = FileGatewayConfig {
            temperature: 2.5,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(issues[0].message.contains("gateway.temperature"));
    }

    #[test]
    fn test_timeout_duration() {
        assert_eq!(FileGatewayConfig::default().timeout(), Duration::from_secs(90));
    }
}
