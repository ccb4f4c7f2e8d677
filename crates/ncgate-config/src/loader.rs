//! Configuration Loader
//!
//! Handles loading and merging configuration from multiple sources with proper precedence.

use crate::gateway::{validate_log_level, GatewayConfig, LibraryConfig};
use crate::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

/// Project configuration file name
pub const PROJECT_CONFIG_FILE: &str = "ncgate.toml";

/// Configuration loader
///
/// Loads configuration from multiple sources and merges them with proper precedence:
/// 1. Global config (~/.ncgate/config.toml) - lowest priority
/// 2. Project config (./ncgate.toml) - overrides global
/// 3. Environment variables (NCGATE_*) - overrides project
pub struct ConfigLoader {
    /// Cached global config path
    global_config_path: Option<PathBuf>,
}

/// Merged configuration result
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Effective gateway configuration
    pub gateway: GatewayConfig,

    /// Directory where ncgate.toml was found
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            global_config_path: None,
        }
    }

    /// Create a loader that reads the global config from `path` instead of the home directory
    pub fn with_global_path(path: impl Into<PathBuf>) -> Self {
        Self {
            global_config_path: Some(path.into()),
        }
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find ncgate.toml, merges it over the
    /// global config, then applies environment overrides.
    pub fn load_from_directory(&mut self, start_dir: &Path) -> ConfigResult<Config> {
        let (project_root, project_config) = self.find_project_config(start_dir)?;

        let mut gateway = self.load_global_config()?;
        gateway.merge(&project_config);
        let gateway = self.apply_env_overrides(gateway)?;

        Ok(Config {
            gateway,
            project_root,
        })
    }

    /// Load configuration from a specific project config file
    pub fn load_from_file(&mut self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = GatewayConfig::load_from_file(config_path)?;

        let mut gateway = self.load_global_config()?;
        gateway.merge(&project_config);
        let gateway = self.apply_env_overrides(gateway)?;

        Ok(Config {
            gateway,
            project_root: config_path.parent().map(|p| p.to_path_buf()),
        })
    }

    /// Find project configuration by walking up directory tree
    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, GatewayConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(PROJECT_CONFIG_FILE);

            if config_path.exists() {
                let config = GatewayConfig::load_from_file(&config_path)?;
                return Ok((Some(current), config));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok((None, GatewayConfig::default())),
            }
        }
    }

    /// Load global configuration; a missing file or home directory yields defaults
    fn load_global_config(&mut self) -> ConfigResult<GatewayConfig> {
        if self.global_config_path.is_none() {
            match Self::global_config_dir() {
                Ok(dir) => self.global_config_path = Some(dir.join("config.toml")),
                Err(ConfigError::HomeNotFound) => return Ok(GatewayConfig::default()),
                Err(e) => return Err(e),
            }
        }

        match &self.global_config_path {
            Some(path) if path.exists() => GatewayConfig::load_from_file(path),
            _ => Ok(GatewayConfig::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// - NCGATE_LIBRARY: library name or path
    /// - NCGATE_LOG_LEVEL: native log level
    /// - NCGATE_ON_VIOLATION: "report" or "abort"
    /// - NCGATE_TRACE_CALLS: true/false, 1/0 or yes/no
    fn apply_env_overrides(&self, mut config: GatewayConfig) -> ConfigResult<GatewayConfig> {
        if let Ok(library) = env::var("NCGATE_LIBRARY") {
            config
                .library
                .get_or_insert_with(LibraryConfig::default)
                .name = Some(library);
        }

        if let Ok(level) = env::var("NCGATE_LOG_LEVEL") {
            let level: i32 = level.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "NCGATE_LOG_LEVEL".to_string(),
                reason: format!("expected an integer, got '{}'", level),
            })?;
            validate_log_level(level)?;
            config
                .diagnostics
                .get_or_insert_with(Default::default)
                .log_level = Some(level);
        }

        if let Ok(policy) = env::var("NCGATE_ON_VIOLATION") {
            config
                .diagnostics
                .get_or_insert_with(Default::default)
                .on_violation = Some(policy.parse().map_err(|_| ConfigError::InvalidValue {
                field: "NCGATE_ON_VIOLATION".to_string(),
                reason: format!("expected 'report' or 'abort', got '{}'", policy),
            })?);
        }

        if let Ok(trace) = env::var("NCGATE_TRACE_CALLS") {
            let trace = parse_flag(&trace).ok_or_else(|| ConfigError::InvalidValue {
                field: "NCGATE_TRACE_CALLS".to_string(),
                reason: format!("expected true/false/1/0/yes/no, got '{}'", trace),
            })?;
            config
                .diagnostics
                .get_or_insert_with(Default::default)
                .trace_calls = Some(trace);
        }

        config.validate()?;
        Ok(config)
    }

    /// Get the global configuration directory (~/.ncgate)
    pub fn global_config_dir() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(".ncgate"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Effective library name
    pub fn library_name(&self) -> &str {
        self.gateway.library_name()
    }

    /// Get the project root directory
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Check if an ncgate.toml was found
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }
}
