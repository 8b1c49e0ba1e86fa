//! Agent definitions and the fixed agent registry.
//!
//! Agents differ only by data (prompt, model, presentation metadata), so the
//! registry is a static array of immutable records. The position of an agent
//! in [`AGENTS`] decides which phase it runs in; see
//! [`Phase::agent_range`](crate::orchestration::phase::Phase::agent_range).

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Display color tag attached to an agent and echoed in its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentColor {
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
    Pink,
}

impl AgentColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentColor::Blue => "blue",
            AgentColor::Green => "green",
            AgentColor::Red => "red",
            AgentColor::Yellow => "yellow",
            AgentColor::Purple => "purple",
            AgentColor::Pink => "pink",
        }
    }
}

impl std::fmt::Display for AgentColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single specialized viewpoint: one system prompt bound to one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDefinition {
    /// Display name, also used as the speaker label in shared context
    pub name: &'static str,
    /// Short role label
    pub role: &'static str,
    /// Glyph shown next to the agent
    pub icon: &'static str,
    /// Model the agent runs on
    pub model: Model,
    pub color: AgentColor,
    pub system_prompt: &'static str,
}

const SYNTHESIZER_PROMPT: &str = r#"Create a balanced recommendation using this EXACT format:

**Recommendation:** [clear decision]

**Key Reasoning:**
• [point 1]
• [point 2]
• [point 3]

**Action Steps:**
1. [step 1]
2. [step 2]
3. [step 3]

**Confidence Level:** [X/10] - [justification]

**Important Considerations:** [risks/caveats]"#;

/// The agent registry, in pipeline order.
///
/// Indices 0..3 analyze the raw query, 3..5 check the analysts' output,
/// 5 synthesizes everything.
pub static AGENTS: [AgentDefinition; 6] = [
    AgentDefinition {
        name: "Research Agent",
        role: "Data & Statistics Analyst",
        icon: "📊",
        model: Model::Gemini25Flash,
        color: AgentColor::Blue,
        system_prompt: "You are analytical, data-driven, and objective. Focus ONLY on numbers, statistics, trends, and verifiable facts. No opinions. Provide your analysis in 3-4 concise sentences.",
    },
    AgentDefinition {
        name: "Pro Advocate",
        role: "Opportunity Finder",
        icon: "💡",
        model: Model::Gemini25Flash,
        color: AgentColor::Green,
        system_prompt: "You are optimistic and opportunity-focused. Build the STRONGEST case FOR this decision. Highlight benefits and positive outcomes. Provide your analysis in 3-4 concise sentences.",
    },
    AgentDefinition {
        name: "Con Advocate",
        role: "Risk Assessor",
        icon: "😈",
        model: Model::Gemini25Flash,
        color: AgentColor::Red,
        system_prompt: "You are cautious and risk-aware. Identify EVERY potential problem, downside, and risk. Be the voice of caution. Provide your analysis in 3-4 concise sentences.",
    },
    AgentDefinition {
        name: "Bias Checker",
        role: "Critical Analyst",
        icon: "🎯",
        model: Model::Gemini25Pro,
        color: AgentColor::Yellow,
        system_prompt: "You analyze OTHER agents' arguments. Identify logical fallacies, confirmation bias, overconfidence, and weak reasoning. Be specific about WHICH agent said WHAT. Provide your analysis in 3-4 concise sentences.",
    },
    AgentDefinition {
        name: "Fact Checker",
        role: "Truth Verifier",
        icon: "✅",
        model: Model::Gemini25Pro,
        color: AgentColor::Purple,
        system_prompt: "You verify claims from OTHER agents. Identify unverified statements, questionable claims, and potential misinformation. Be specific about WHICH claims need verification. Provide your analysis in 3-4 concise sentences.",
    },
    AgentDefinition {
        name: "Synthesizer",
        role: "Strategic Advisor",
        icon: "🎓",
        model: Model::Gemini25Pro,
        color: AgentColor::Pink,
        system_prompt: SYNTHESIZER_PROMPT,
    },
];

/// Index of the synthesizer in [`AGENTS`].
pub const SYNTHESIZER_INDEX: usize = 5;

/// The synthesizer agent.
pub fn synthesizer() -> &'static AgentDefinition {
    &AGENTS[SYNTHESIZER_INDEX]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_has_six_unique_agents() {
        let names: HashSet<_> = AGENTS.iter().map(|a| a.name).collect();
        assert_eq!(names.len(), 6);
        let prompts: HashSet<_> = AGENTS.iter().map(|a| a.system_prompt).collect();
        assert_eq!(prompts.len(), 6);
    }

    #[test]
    fn test_synthesizer_is_last() {
        assert_eq!(synthesizer().name, "Synthesizer");
        assert_eq!(SYNTHESIZER_INDEX, AGENTS.len() - 1);
        assert!(synthesizer().system_prompt.contains("X/10"));
    }

    #[test]
    fn test_checkers_and_synthesizer_use_pro_model() {
        for agent in &AGENTS[..3] {
            assert_eq!(agent.model, Model::Gemini25Flash);
        }
        for agent in &AGENTS[3..] {
            assert_eq!(agent.model, Model::Gemini25Pro);
        }
    }

    #[test]
    fn test_color_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&AgentColor::Purple).unwrap(), r#""purple""#);
    }
}
