//! Events emitted by a swarm run.
//!
//! [`StreamEvent`] serializes to the tagged JSON object carried by each
//! event-stream record, e.g. `{"type":"status","message":"..."}`.

use crate::agent::result::{AgentResult, FinalResponse};
use serde::{Deserialize, Serialize};

/// Message carried by the `complete` event
pub const COMPLETE_MESSAGE: &str = "✅ Analysis complete!";

/// An event in a swarm run's live stream.
///
/// Exactly one terminal event (`Complete` or `Error`) ends a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Human-readable progress line.
    Status { message: String },
    /// One agent finished.
    AgentResponse { data: AgentResult },
    /// The synthesizer finished.
    FinalResponse { data: FinalResponse },
    /// The run finished successfully.
    Complete { message: String },
    /// The run was aborted.
    Error { message: String },
}

impl StreamEvent {
    pub fn status(message: impl Into<String>) -> Self {
        StreamEvent::Status {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        StreamEvent::Error {
            message: message.into(),
        }
    }

    pub fn complete() -> Self {
        StreamEvent::Complete {
            message: COMPLETE_MESSAGE.to_string(),
        }
    }

    /// The wire tag of this event.
    pub fn kind(&self) -> &'static str {
        match self {
            StreamEvent::Status { .. } => "status",
            StreamEvent::AgentResponse { .. } => "agent_response",
            StreamEvent::FinalResponse { .. } => "final_response",
            StreamEvent::Complete { .. } => "complete",
            StreamEvent::Error { .. } => "error",
        }
    }

    /// Returns true if this event ends the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Complete { .. } | StreamEvent::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::definition::{AGENTS, synthesizer};
    use serde_json::json;

    #[test]
    fn test_status_wire_shape() {
        let value = serde_json::to_value(StreamEvent::status("hi")).unwrap();
        assert_eq!(value, json!({"type": "status", "message": "hi"}));
    }

    #[test]
    fn test_agent_response_wire_shape() {
        let event = StreamEvent::AgentResponse {
            data: AgentResult::new(&AGENTS[1], "Upside!"),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "agent_response");
        assert_eq!(value["data"]["agent"], "Pro Advocate");
        assert_eq!(value["data"]["color"], "green");
    }

    #[test]
    fn test_final_response_roundtrip() {
        let event = StreamEvent::FinalResponse {
            data: FinalResponse::new(synthesizer(), "**Recommendation:** Yes"),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.starts_with(r#"{"type":"final_response""#));
        let back: StreamEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_terminal_events() {
        assert!(StreamEvent::complete().is_terminal());
        assert!(StreamEvent::error("boom").is_terminal());
        assert!(!StreamEvent::status("x").is_terminal());
        assert_eq!(StreamEvent::complete().kind(), "complete");
    }
}
