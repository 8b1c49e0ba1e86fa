//! Prompt domain
//!
//! Templates for the user messages sent at each stage of the swarm flow.
//! Agent system prompts live with the agent registry.

mod template;

pub use template::{FOLLOWUP_SUMMARY_LIMIT, PromptTemplate};
