//! Domain layer for decision-swarm
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Swarm
//!
//! A fixed registry of six agents answers one query in three phases:
//!
//! - **Analysis**: three analysts see only the query
//! - **Verification**: two checkers see the query and the analysts' output
//! - **Synthesis**: one synthesizer sees everything and writes the recommendation
//!
//! Progress is reported as [`StreamEvent`]s.

pub mod agent;
pub mod config;
pub mod core;
pub mod followup;
pub mod history;
pub mod orchestration;
pub mod prompt;
pub mod recommendation;

// Re-export commonly used types
pub use agent::{
    AGENTS, AgentColor, AgentDefinition, AgentResult, FinalResponse, SYNTHESIZER_INDEX,
    synthesizer,
};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, model::Model, query::Query};
pub use followup::FollowUps;
pub use history::{HISTORY_LIMIT, History, HistoryEntry, format_processing_time};
pub use orchestration::{
    context::{IncompletePhase, RequestContext},
    event::{COMPLETE_MESSAGE, StreamEvent},
    phase::Phase,
};
pub use prompt::PromptTemplate;
pub use recommendation::confidence_score;
