//! Configuration file loading for decision-swarm
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables: `SWARM_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./swarm.toml` or `./.swarm.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/decision-swarm/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileFollowupsConfig, FileGatewayConfig, FileHistoryConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
