//! Agent domain module
//!
//! The fixed agent registry and the values agents produce.

pub mod definition;
pub mod result;

pub use definition::{AGENTS, AgentColor, AgentDefinition, SYNTHESIZER_INDEX, synthesizer};
pub use result::{AgentResult, FinalResponse};
