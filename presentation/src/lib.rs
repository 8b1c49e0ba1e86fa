//! Presentation layer for decision-swarm
//!
//! This crate contains the HTTP server, the event-stream client,
//! CLI definitions, output formatters, and progress reporters.

pub mod cli;
pub mod client;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use client::{RemoteError, RemoteSwarmClient, SseDecoder, StreamParseError};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
pub use server::{AppState, ServerError};
