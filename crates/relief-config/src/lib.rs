//! Configuration with sensible defaults and RON persistence.

mod config;
mod error;

pub use config::{Config, DebugConfig, TerrainConfig};
pub use error::ConfigError;
