//! HTTP LLM Gateway implementation

use super::protocol::{ChatCompletionRequest, ChatCompletionResponse};
use crate::config::FileGatewayConfig;
use async_trait::async_trait;
use std::time::Duration;
use swarm_application::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use tracing::{debug, info, warn};

/// Resolved gateway settings
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub base_url: String,
    /// Bearer key; `None` makes every call fail with a configuration error
    pub api_key: Option<String>,
    /// Name of the variable the key was expected in, for error messages
    pub api_key_env: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl GatewaySettings {
    /// Resolve settings from the `[gateway]` section and the environment
    pub fn from_config(config: &FileGatewayConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.resolve_api_key(),
            api_key_env: config.api_key_env.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout: config.timeout(),
        }
    }
}

/// LLM Gateway implementation for an OpenAI-compatible chat-completions API
pub struct HttpLlmGateway {
    client: reqwest::Client,
    settings: GatewaySettings,
    endpoint: String,
}

impl HttpLlmGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;

        let endpoint = format!("{}/chat/completions", settings.base_url.trim_end_matches('/'));

        if settings.api_key.is_none() {
            warn!(
                "{} is not set; completion requests will fail",
                settings.api_key_env
            );
        }
        info!("HttpLlmGateway initialized for {}", endpoint);

        Ok(Self {
            client,
            settings,
            endpoint,
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_decode() {
        GatewayError::InvalidResponse(e.to_string())
    } else {
        GatewayError::Connection(e.to_string())
    }
}

#[async_trait]
impl LlmGateway for HttpLlmGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let api_key = self.settings.api_key.as_deref().ok_or_else(|| {
            GatewayError::Configuration(format!(
                "{} is not configured",
                self.settings.api_key_env
            ))
        })?;

        let body = ChatCompletionRequest::new(
            request.model.as_str(),
            &request.system_prompt,
            &request.user_message,
            self.settings.max_tokens,
            self.settings.temperature,
        );

        debug!("POST {} model={}", self.endpoint, request.model);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("AI gateway error {} for {}: {}", status, request.model, body);
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(map_transport_error)?;

        parsed.into_first_content().ok_or_else(|| {
            GatewayError::InvalidResponse("response carried no completion choice".to_string())
        })
    }
}
