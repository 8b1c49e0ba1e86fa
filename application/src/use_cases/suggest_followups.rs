//! Suggest Follow-ups use case
//!
//! Asks a model for three follow-up questions about a finished analysis.
//! Unlike the swarm run, this never fails: every error degrades to a fixed
//! list of questions.

use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use std::sync::Arc;
use swarm_domain::{FollowUps, Model, PromptTemplate};
use tracing::{debug, warn};

/// Use case for generating follow-up questions
pub struct SuggestFollowUpsUseCase<G: LlmGateway + ?Sized + 'static> {
    gateway: Arc<G>,
    model: Model,
}

impl<G: LlmGateway + ?Sized + 'static> Clone for SuggestFollowUpsUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            model: self.model.clone(),
        }
    }
}

impl<G: LlmGateway + ?Sized + 'static> SuggestFollowUpsUseCase<G> {
    pub fn new(gateway: Arc<G>, model: Model) -> Self {
        Self { gateway, model }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Always returns exactly three questions.
    pub async fn execute(&self, query: &str, recommendation: &str) -> FollowUps {
        debug!(
            "Generating follow-up questions for query: {}",
            query.chars().take(50).collect::<String>()
        );

        let request = CompletionRequest::new(
            self.model.clone(),
            PromptTemplate::followup_system(),
            PromptTemplate::followup_prompt(query, recommendation),
        );

        let content = match self.gateway.complete(&request).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Error generating follow-ups: {}", e);
                return FollowUps::gateway_fallback();
            }
        };

        match FollowUps::from_model_output(&content) {
            Ok(followups) => followups,
            Err(e) => {
                warn!("Failed to parse follow-ups: {}", e);
                FollowUps::parse_fallback()
            }
        }
    }
}
