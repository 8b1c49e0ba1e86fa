//! OpenAI-compatible chat-completions adapter
//!
//! Implements LlmGateway over HTTP with a bearer key.

pub mod client;
pub mod protocol;

pub use client::{GatewaySettings, HttpLlmGateway};
