//! ncgate configuration
//!
//! Configuration for the serialized libnetcdf gateway:
//! - Which native library to load and where to look for it
//! - Chunk-cache sizing applied once the library is loaded
//! - Diagnostics (native log level, violation policy, call tracing)
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded and merged in the following order (later overrides earlier):
//! 1. Global config (~/.ncgate/config.toml)
//! 2. Project config (./ncgate.toml, searched upwards)
//! 3. Environment variables (NCGATE_*)
//!
//! # Example
//!
//! ```no_run
//! use ncgate_config::ConfigLoader;
//! use std::path::Path;
//!
//! let mut loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! println!("loading {}", config.library_name());
//! ```

pub mod gateway;
pub mod loader;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Home directory not found")]
    HomeNotFound,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

pub use gateway::{
    ChunkCacheConfig, DiagnosticsConfig, GatewayConfig, LibraryConfig, ViolationPolicySetting,
};
pub use loader::{Config, ConfigLoader};
