//! Router and request handlers

use super::error::ServerError;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    response::{
        IntoResponse, Response,
        sse::{Event, Sse},
    },
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use swarm_application::{LlmGateway, RunSwarmUseCase, SuggestFollowUpsUseCase};
use swarm_domain::{Model, Query};
use tokio::sync::mpsc;
use tokio_stream::{StreamExt, wrappers::ReceiverStream};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Capacity of the per-request event channel
pub const EVENT_BUFFER: usize = 32;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    swarm: RunSwarmUseCase<dyn LlmGateway>,
    followups: SuggestFollowUpsUseCase<dyn LlmGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn LlmGateway>, followup_model: Model) -> Self {
        Self {
            swarm: RunSwarmUseCase::new(Arc::clone(&gateway)),
            followups: SuggestFollowUpsUseCase::new(gateway, followup_model),
        }
    }
}

/// CORS policy allowing `origin` (`*` for any)
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ServerError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    if origin == "*" {
        Ok(layer.allow_origin(Any))
    } else {
        let value = HeaderValue::from_str(origin)
            .map_err(|_| ServerError::InvalidOrigin(origin.to_string()))?;
        Ok(layer.allow_origin(value))
    }
}

pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/followups", post(followups))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Lenient body parse: malformed JSON is treated like an empty object.
fn parse_body(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

async fn analyze(State(state): State<AppState>, body: Bytes) -> Response {
    let payload = parse_body(&body);
    let query = match Query::from_json_field(payload.get("query")) {
        Ok(query) => query,
        Err(e) => {
            warn!("Rejected analyze request: {}", e);
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
                .into_response();
        }
    };

    let (tx, rx) = mpsc::channel(EVENT_BUFFER);
    let swarm = state.swarm.clone();
    tokio::spawn(async move {
        match swarm.execute(query, tx).await {
            Ok(outcome) => info!(
                "Streamed {} agent responses and a final recommendation",
                outcome.agent_results.len()
            ),
            Err(e) if e.is_cancelled() => info!("Run cancelled: {}", e),
            Err(e) => warn!("Run failed: {}", e),
        }
    });

    let stream = ReceiverStream::new(rx).map(|event| Event::default().json_data(&event));
    Sse::new(stream).into_response()
}

async fn followups(State(state): State<AppState>, body: Bytes) -> Json<Value> {
    let payload = parse_body(&body);
    let field = |name: &str| {
        payload
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let (query, recommendation) = (field("query"), field("recommendation"));

    let follow_ups = state.followups.execute(&query, &recommendation).await;
    Json(json!({ "followUps": follow_ups }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
