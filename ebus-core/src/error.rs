//! src/error.rs
//! ============================================================================
//! # `BusError`: Unified Error Type for the Event Bus
//!
//! Errors raised by the ambient surfaces of the crate: configuration,
//! notification wiring and terminal setup. Event dispatch itself is
//! infallible by design: an unknown event name is handled by the fallback
//! path, a panicking handler propagates to the `trigger` caller unwrapped,
//! and payload shape is each handler's own problem.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for event-bus setup and configuration.
#[derive(Debug, Error)]
pub enum BusError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config encode error: {0}")]
    ConfigSer(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Notification center rejected its configuration.
    #[error("Notification error: {0}")]
    Toast(#[from] toastr::ToastError),

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl BusError {
    #[must_use]
    /// Attach extra context to an error.
    pub fn with_context<S: Into<String>>(self, ctx: S) -> Self {
        Self::Other(format!("{}: {}", ctx.into(), self))
    }

    /// Create a config file I/O error
    pub fn config_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for BusError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e.to_string())
    }
}
