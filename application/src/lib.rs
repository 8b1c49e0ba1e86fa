//! Application layer for decision-swarm
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
pub use use_cases::run_swarm::{RunSwarmError, RunSwarmUseCase, SwarmOutcome};
pub use use_cases::suggest_followups::SuggestFollowUpsUseCase;
