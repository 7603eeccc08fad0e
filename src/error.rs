//! Error types for iconset generation and packaging.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that can occur while writing or packaging an iconset.
///
/// Rendering itself never fails; every variant here comes from the
/// filesystem or from the external icon compiler.
#[derive(Debug, Error)]
pub enum Error {
    /// The external icon compiler is not installed or not on the search path.
    #[error("{tool} not found; packaging an iconset requires {tool} (macOS only)")]
    ToolNotFound { tool: String },

    /// The external icon compiler exists but could not be started.
    #[error("failed to launch {tool}")]
    ToolLaunch {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The external icon compiler ran and exited unsuccessfully.
    #[error("{tool} failed ({status}): {stderr}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    /// A filesystem operation on `path` failed.
    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A rendered image could not be encoded to `path`.
    #[error("failed to write image {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Manifest (de)serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
