//! LLM Gateway port
//!
//! Defines the interface for calling the external chat-completion service.

use async_trait::async_trait;
use swarm_domain::{AgentDefinition, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The service credential is absent.
    #[error("{0}")]
    Configuration(String),

    /// The service answered with a non-success status.
    #[error("AI request failed: {status}")]
    Status { status: u16, body: String },

    #[error("AI request timed out")]
    Timeout,

    #[error("Connection error: {0}")]
    Connection(String),

    /// The service answered 2xx but without usable content.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// HTTP status carried by a [`GatewayError::Status`] failure
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::Configuration(_))
    }
}

/// One system + user exchange with a named model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: Model,
    pub system_prompt: String,
    pub user_message: String,
}

impl CompletionRequest {
    pub fn new(
        model: Model,
        system_prompt: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self {
            model,
            system_prompt: system_prompt.into(),
            user_message: user_message.into(),
        }
    }

    /// Request for `agent`, using its model and system prompt
    pub fn for_agent(agent: &AgentDefinition, user_message: impl Into<String>) -> Self {
        Self::new(agent.model.clone(), agent.system_prompt, user_message)
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the completion
/// service. Implementations (adapters) live in the infrastructure layer.
/// A call is a single request/response; failures are never retried here.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send one request and return the text of the first completion choice
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
