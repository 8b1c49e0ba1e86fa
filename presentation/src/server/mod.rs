//! HTTP surface for the swarm
//!
//! `POST /api/analyze` streams a run as server-sent events,
//! `POST /api/followups` suggests follow-up questions, `GET /health` answers
//! liveness probes.

mod error;
mod routes;

pub use error::ServerError;
pub use routes::{AppState, EVENT_BUFFER, cors_layer, router};

use std::net::SocketAddr;
use tracing::info;

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState, allowed_origin: &str) -> Result<(), ServerError> {
    let app = router(state, cors_layer(allowed_origin)?);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
