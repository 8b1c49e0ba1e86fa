//! Infrastructure layer for decision-swarm
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gateway;
pub mod history;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileFollowupsConfig, FileGatewayConfig,
    FileHistoryConfig, FileServerConfig,
};
pub use gateway::{GatewaySettings, HttpLlmGateway};
pub use history::{HistoryError, JsonHistoryStore};
