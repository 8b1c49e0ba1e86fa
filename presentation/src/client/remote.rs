//! HTTP client for a running swarm server

use super::decoder::SseDecoder;
use futures::StreamExt;
use serde_json::{Value, json};
use swarm_domain::{FollowUps, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("request to swarm server failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("swarm server rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Client for `POST /api/analyze` and `POST /api/followups`
pub struct RemoteSwarmClient {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteSwarmClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Stream a run from the server into `events`.
    ///
    /// Returns once the server closes the stream or the receiver is dropped.
    /// Malformed records are logged and skipped.
    pub async fn analyze(
        &self,
        query: &str,
        events: mpsc::Sender<StreamEvent>,
    ) -> Result<(), RemoteError> {
        let url = format!("{}/api/analyze", self.base_url);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&json!({ "query": query }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| status.to_string());
            return Err(RemoteError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let mut decoder = SseDecoder::new();
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            for decoded in decoder.push(&chunk?) {
                if !forward(decoded, &events).await {
                    return Ok(());
                }
            }
        }
        if let Some(decoded) = decoder.finish() {
            forward(decoded, &events).await;
        }
        Ok(())
    }

    pub async fn followups(
        &self,
        query: &str,
        recommendation: &str,
    ) -> Result<FollowUps, RemoteError> {
        let url = format!("{}/api/followups", self.base_url);
        let body: Value = self
            .client
            .post(&url)
            .json(&json!({ "query": query, "recommendation": recommendation }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let questions = body
            .get("followUps")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        Ok(FollowUps::normalize(questions))
    }
}

/// Send a decoded record on; false once the receiver is gone.
async fn forward(
    decoded: Result<StreamEvent, super::decoder::StreamParseError>,
    events: &mpsc::Sender<StreamEvent>,
) -> bool {
    match decoded {
        Ok(event) => events.send(event).await.is_ok(),
        Err(e) => {
            warn!("Skipping stream record: {}", e);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn collect(client: &RemoteSwarmClient, query: &str) -> (Result<(), RemoteError>, Vec<StreamEvent>) {
        let (tx, mut rx) = mpsc::channel(64);
        let result = client.analyze(query, tx).await;
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        (result, events)
    }

    #[tokio::test]
    async fn test_analyze_decodes_stream() {
        let server = MockServer::start().await;
        let body = concat!(
            "data: {\"type\":\"status\",\"message\":\"🚀 Activating agent swarm...\"}\n\n",
            "data: {broken\n\n",
            "data: {\"type\":\"error\",\"message\":\"AI request failed: 500\"}\n\n",
        );
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .and(body_json(json!({"query": "Rent or buy?"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/event-stream")
                    .set_body_string(body),
            )
            .mount(&server)
            .await;

        let client = RemoteSwarmClient::new(format!("{}/", server.uri()));
        let (result, events) = collect(&client, "Rent or buy?").await;

        assert!(result.is_ok());
        assert_eq!(
            events,
            vec![
                StreamEvent::status("🚀 Activating agent swarm..."),
                StreamEvent::error("AI request failed: 500"),
            ]
        );
    }

    #[tokio::test]
    async fn test_analyze_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "Query is required"})),
            )
            .mount(&server)
            .await;

        let client = RemoteSwarmClient::new(server.uri());
        let (result, events) = collect(&client, "").await;

        assert!(events.is_empty());
        match result {
            Err(RemoteError::Rejected { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Query is required");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_followups() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/followups"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"followUps": ["A?", "B?", "C?"]})),
            )
            .mount(&server)
            .await;

        let client = RemoteSwarmClient::new(server.uri());
        let f = client.followups("q", "r").await.unwrap();
        assert_eq!(f.questions(), &["A?", "B?", "C?"]);
    }
}
