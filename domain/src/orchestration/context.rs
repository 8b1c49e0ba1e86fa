//! Per-request accumulated context.

use super::phase::Phase;
use crate::agent::result::AgentResult;
use crate::core::query::Query;
use thiserror::Error;

/// Raised when a phase is committed without a result for every member.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("phase {phase} is incomplete: expected {expected} results, got {actual}")]
pub struct IncompletePhase {
    pub phase: Phase,
    pub expected: usize,
    pub actual: usize,
}

/// Transient state for one swarm run.
///
/// Results enter only through [`complete_phase`](Self::complete_phase), one
/// whole phase at a time, so the context block never contains partial phases
/// and is always in registry order regardless of completion order.
#[derive(Debug, Clone)]
pub struct RequestContext {
    query: Query,
    results: Vec<AgentResult>,
}

impl RequestContext {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            results: Vec::new(),
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Results of all committed phases, in registry order
    pub fn results(&self) -> &[AgentResult] {
        &self.results
    }

    /// Commit a finished phase.
    ///
    /// `results` are `(registry index, result)` pairs in any order. Every index
    /// of the phase must be present exactly once.
    pub fn complete_phase(
        &mut self,
        phase: Phase,
        mut results: Vec<(usize, AgentResult)>,
    ) -> Result<(), IncompletePhase> {
        let range = phase.agent_range();
        results.sort_by_key(|(index, _)| *index);
        results.dedup_by_key(|(index, _)| *index);

        let complete = results.len() == range.len()
            && results.iter().zip(range.clone()).all(|((i, _), want)| *i == want);
        if !complete {
            return Err(IncompletePhase {
                phase,
                expected: range.len(),
                actual: results.len(),
            });
        }

        self.results.extend(results.into_iter().map(|(_, r)| r));
        Ok(())
    }

    /// The `"agent: text"` block handed to later phases, blank-line separated.
    pub fn context_block(&self) -> String {
        self.results
            .iter()
            .map(AgentResult::context_line)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::definition::AGENTS;

    fn ctx() -> RequestContext {
        RequestContext::new(Query::parse("Move to Berlin?").unwrap())
    }

    #[test]
    fn test_context_is_registry_ordered() {
        let mut ctx = ctx();
        // Completion order: Con, Research, Pro
        let results = vec![
            (2, AgentResult::new(&AGENTS[2], "c")),
            (0, AgentResult::new(&AGENTS[0], "a")),
            (1, AgentResult::new(&AGENTS[1], "b")),
        ];
        ctx.complete_phase(Phase::Analysis, results).unwrap();
        assert_eq!(
            ctx.context_block(),
            "Research Agent: a\n\nPro Advocate: b\n\nCon Advocate: c"
        );
    }

    #[test]
    fn test_incomplete_phase_rejected() {
        let mut ctx = ctx();
        let results = vec![
            (0, AgentResult::new(&AGENTS[0], "a")),
            (1, AgentResult::new(&AGENTS[1], "b")),
        ];
        let err = ctx.complete_phase(Phase::Analysis, results).unwrap_err();
        assert_eq!(err.expected, 3);
        assert_eq!(err.actual, 2);
        assert!(ctx.results().is_empty());
        assert!(ctx.context_block().is_empty());
    }

    #[test]
    fn test_foreign_index_rejected() {
        let mut ctx = ctx();
        let results = vec![
            (3, AgentResult::new(&AGENTS[3], "x")),
            (5, AgentResult::new(&AGENTS[5], "y")),
        ];
        assert!(ctx.complete_phase(Phase::Verification, results).is_err());
    }

    #[test]
    fn test_context_accumulates_across_phases() {
        let mut ctx = ctx();
        ctx.complete_phase(
            Phase::Analysis,
            (0..3).map(|i| (i, AgentResult::new(&AGENTS[i], format!("r{i}")))).collect(),
        )
        .unwrap();
        ctx.complete_phase(
            Phase::Verification,
            vec![
                (4, AgentResult::new(&AGENTS[4], "r4")),
                (3, AgentResult::new(&AGENTS[3], "r3")),
            ],
        )
        .unwrap();

        let block = ctx.context_block();
        let names: Vec<_> = block
            .split("\n\n")
            .map(|line| line.split(':').next().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["Research Agent", "Pro Advocate", "Con Advocate", "Bias Checker", "Fact Checker"]
        );
    }
}
