//! Follow-up suggestion configuration from TOML (`[followups]` section)

use serde::{Deserialize, Serialize};
use swarm_domain::{ConfigIssue, ConfigIssueCode, Model};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFollowupsConfig {
    /// Model asked for follow-up questions
    pub model: String,
}

impl Default for FileFollowupsConfig {
    fn default() -> Self {
        Self {
            model: Model::Gemini25Flash.to_string(),
        }
    }
}

impl FileFollowupsConfig {
    pub fn model(&self) -> Model {
        Model::from(self.model.trim())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.model.trim().is_empty() {
            vec![ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "followups.model".to_string(),
                },
                "followups.model: model name cannot be empty",
            )]
        } else {
            Vec::new()
        }
    }
}
