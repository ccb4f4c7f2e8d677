//! Gateway errors
//!
//! Native failures are not errors at this level: they come back as a
//! [`Status`] inside `Ok`. `GatewayError` covers what the gateway itself can
//! detect: a broken bracket, a library that cannot be loaded, bad
//! configuration, or a failed setup call during initialization.

use crate::ffi::LoadError;
use crate::monitor::ProtocolViolation;
use crate::status::Status;
use ncgate_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Protocol(#[from] ProtocolViolation),

    #[error("failed to load libnetcdf: {0}")]
    Load(#[from] LoadError),

    #[error("invalid gateway configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{op} failed during gateway setup: {status}")]
    Setup { op: &'static str, status: Status },
}

impl GatewayError {
    /// The violation, if this error is one
    pub fn as_violation(&self) -> Option<&ProtocolViolation> {
        match self {
            GatewayError::Protocol(v) => Some(v),
            _ => None,
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
