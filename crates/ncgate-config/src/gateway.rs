//! Gateway Configuration (ncgate.toml / ~/.ncgate/config.toml)
//!
//! Both the global and the project file share this schema; the loader merges
//! them field-group by field-group.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default native library name, resolved to `libnetcdf.so` / `libnetcdf.dylib` / `netcdf.dll`
pub const DEFAULT_LIBRARY_NAME: &str = "netcdf";

/// Gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Native library location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<LibraryConfig>,

    /// Global chunk cache applied after the library is loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_cache: Option<ChunkCacheConfig>,

    /// Diagnostics settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<DiagnosticsConfig>,
}

/// Native library location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct LibraryConfig {
    /// Library name ("netcdf") or absolute path to the shared object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Extra directories searched before the system defaults
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub search_paths: Vec<PathBuf>,
}

/// Chunk cache sizing, passed to `nc_set_chunk_cache`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChunkCacheConfig {
    /// Cache size in bytes
    pub size: usize,

    /// Number of chunk slots
    pub nelems: usize,

    /// Preemption factor in [0, 1]
    pub preemption: f32,
}

/// Diagnostics settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Native log verbosity passed to `nc_set_log_level` (-1 disables)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<i32>,

    /// What to do when a bracketing violation is observed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_violation: Option<ViolationPolicySetting>,

    /// Emit a trace event for every gateway call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_calls: Option<bool>,
}

/// Violation policy as written in configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViolationPolicySetting {
    /// Log and return the violation to the caller
    #[default]
    Report,
    /// Log, then panic
    Abort,
}

impl FromStr for ViolationPolicySetting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "report" => Ok(Self::Report),
            "abort" => Ok(Self::Abort),
            other => Err(ConfigError::InvalidValue {
                field: "diagnostics.on_violation".to_string(),
                reason: format!("must be 'report' or 'abort', got '{}'", other),
            }),
        }
    }
}

impl fmt::Display for ViolationPolicySetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report => write!(f, "report"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        Self::parse(&content, path)
    }

    /// Parse configuration text; `origin` is only used in error messages
    pub fn parse(content: &str, origin: &Path) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::TomlParseError {
            file: origin.to_path_buf(),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate value ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(library) = &self.library {
            if let Some(name) = &library.name {
                if name.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: "library.name".to_string(),
                        reason: "must not be empty".to_string(),
                    });
                }
            }
        }

        if let Some(cache) = &self.chunk_cache {
            if !(0.0..=1.0).contains(&cache.preemption) {
                return Err(ConfigError::InvalidValue {
                    field: "chunk_cache.preemption".to_string(),
                    reason: format!("must be within [0, 1], got {}", cache.preemption),
                });
            }
        }

        if let Some(diagnostics) = &self.diagnostics {
            if let Some(level) = diagnostics.log_level {
                validate_log_level(level)?;
            }
        }

        Ok(())
    }

    /// Merge another config into this one
    /// Other config takes precedence for non-None values
    pub fn merge(&mut self, other: &GatewayConfig) {
        if let Some(library) = &other.library {
            let base = self.library.get_or_insert_with(Default::default);
            if library.name.is_some() {
                base.name = library.name.clone();
            }
            if !library.search_paths.is_empty() {
                base.search_paths = library.search_paths.clone();
            }
        }
        if other.chunk_cache.is_some() {
            self.chunk_cache = other.chunk_cache;
        }
        if let Some(diagnostics) = &other.diagnostics {
            let base = self.diagnostics.get_or_insert_with(Default::default);
            if diagnostics.log_level.is_some() {
                base.log_level = diagnostics.log_level;
            }
            if diagnostics.on_violation.is_some() {
                base.on_violation = diagnostics.on_violation;
            }
            if diagnostics.trace_calls.is_some() {
                base.trace_calls = diagnostics.trace_calls;
            }
        }
    }

    /// Effective library name
    pub fn library_name(&self) -> &str {
        self.library
            .as_ref()
            .and_then(|l| l.name.as_deref())
            .unwrap_or(DEFAULT_LIBRARY_NAME)
    }

    /// Configured extra search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        self.library
            .as_ref()
            .map(|l| l.search_paths.as_slice())
            .unwrap_or(&[])
    }

    /// Native log level, if one was configured
    pub fn log_level(&self) -> Option<i32> {
        self.diagnostics.as_ref().and_then(|d| d.log_level)
    }

    /// Effective violation policy
    pub fn violation_policy(&self) -> ViolationPolicySetting {
        self.diagnostics
            .as_ref()
            .and_then(|d| d.on_violation)
            .unwrap_or_default()
    }

    /// Whether per-call trace events are enabled
    pub fn trace_calls(&self) -> bool {
        self.diagnostics
            .as_ref()
            .and_then(|d| d.trace_calls)
            .unwrap_or(false)
    }
}

/// Native log levels run from -1 (off) to 5 (most verbose)
pub(crate) fn validate_log_level(level: i32) -> ConfigResult<()> {
    if !(-1..=5).contains(&level) {
        return Err(ConfigError::InvalidValue {
            field: "diagnostics.log_level".to_string(),
            reason: format!("must be within -1..=5, got {}", level),
        });
    }
    Ok(())
}
