//! Pipeline phases

use crate::agent::definition::{AGENTS, AgentDefinition};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Phase of a swarm run
///
/// Agents inside a phase run concurrently; phases run strictly one after
/// another. Membership is fixed by registry position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Independent analysts answer the raw query
    Analysis,
    /// Checkers review the analysts' output
    Verification,
    /// The synthesizer produces the final recommendation
    Synthesis,
}

impl Phase {
    /// All phases in execution order
    pub const ALL: [Phase; 3] = [Phase::Analysis, Phase::Verification, Phase::Synthesis];

    pub fn as_str(&self) -> &str {
        match self {
            Phase::Analysis => "analysis",
            Phase::Verification => "verification",
            Phase::Synthesis => "synthesis",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::Analysis => "Analysis",
            Phase::Verification => "Bias & Fact Check",
            Phase::Synthesis => "Synthesis",
        }
    }

    /// Registry indices of the agents in this phase
    pub fn agent_range(&self) -> Range<usize> {
        match self {
            Phase::Analysis => 0..3,
            Phase::Verification => 3..5,
            Phase::Synthesis => 5..6,
        }
    }

    /// Agents in this phase, in registry order
    pub fn agents(&self) -> &'static [AgentDefinition] {
        &AGENTS[self.agent_range()]
    }

    /// Status line announced when the phase starts
    pub fn start_message(&self) -> &'static str {
        match self {
            Phase::Analysis => "🚀 Activating agent swarm...",
            Phase::Verification => "🎯 Checking for biases and verifying facts...",
            Phase::Synthesis => "🎓 Synthesizing final recommendation...",
        }
    }

    /// Whether agents in this phase receive the prior phases' context
    pub fn uses_context(&self) -> bool {
        !matches!(self, Phase::Analysis)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_partition_the_registry() {
        let mut covered = Vec::new();
        for phase in Phase::ALL {
            covered.extend(phase.agent_range());
        }
        assert_eq!(covered, (0..AGENTS.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_phase_sizes() {
        assert_eq!(Phase::Analysis.agents().len(), 3);
        assert_eq!(Phase::Verification.agents().len(), 2);
        assert_eq!(Phase::Synthesis.agents().len(), 1);
        assert_eq!(Phase::Synthesis.agents()[0].name, "Synthesizer");
    }

    #[test]
    fn test_only_analysis_runs_without_context() {
        assert!(!Phase::Analysis.uses_context());
        assert!(Phase::Verification.uses_context());
        assert!(Phase::Synthesis.uses_context());
    }
}
