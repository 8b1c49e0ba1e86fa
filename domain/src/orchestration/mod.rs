//! Swarm orchestration domain
//!
//! Phases, the per-request context that flows between them, and the events
//! a run emits.

pub mod context;
pub mod event;
pub mod phase;
