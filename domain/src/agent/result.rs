//! Agent output value objects.
//!
//! Field names follow the wire format of the event stream (`agent`, `role`,
//! `icon`, `response`, `color`, `model`).

use super::definition::{AgentColor, AgentDefinition};
use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// The completed output of one agent for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResult {
    /// Agent display name
    pub agent: String,
    pub role: String,
    pub icon: String,
    /// Generated text
    pub response: String,
    pub color: AgentColor,
    pub model: Model,
}

impl AgentResult {
    /// Creates a result for `agent` carrying the generated text.
    pub fn new(agent: &AgentDefinition, response: impl Into<String>) -> Self {
        Self {
            agent: agent.name.to_string(),
            role: agent.role.to_string(),
            icon: agent.icon.to_string(),
            response: response.into(),
            color: agent.color,
            model: agent.model.clone(),
        }
    }

    /// Renders the `"{agent}: {response}"` line used in shared context.
    pub fn context_line(&self) -> String {
        format!("{}: {}", self.agent, self.response)
    }
}

/// The synthesizer's final recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResponse {
    pub agent: String,
    pub role: String,
    pub icon: String,
    pub response: String,
    pub model: Model,
}

impl FinalResponse {
    pub fn new(agent: &AgentDefinition, response: impl Into<String>) -> Self {
        Self {
            agent: agent.name.to_string(),
            role: agent.role.to_string(),
            icon: agent.icon.to_string(),
            response: response.into(),
            model: agent.model.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::definition::{AGENTS, synthesizer};
    use serde_json::json;

    #[test]
    fn test_agent_result_wire_shape() {
        let result = AgentResult::new(&AGENTS[0], "Numbers look good.");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "agent": "Research Agent",
                "role": "Data & Statistics Analyst",
                "icon": "📊",
                "response": "Numbers look good.",
                "color": "blue",
                "model": "google/gemini-2.5-flash",
            })
        );
    }

    #[test]
    fn test_final_response_has_no_color() {
        let value = serde_json::to_value(FinalResponse::new(synthesizer(), "Go for it")).unwrap();
        assert!(value.get("color").is_none());
        assert_eq!(value["model"], "google/gemini-2.5-pro");
    }

    #[test]
    fn test_context_line() {
        let result = AgentResult::new(&AGENTS[2], "Risky.");
        assert_eq!(result.context_line(), "Con Advocate: Risky.");
    }
}
