// file: src/error.rs
// version: 1.1.0
// guid: 43d2912d-e4ca-43bf-8af8-2587bde0f600

use std::io::ErrorKind;
use thiserror::Error;

/// Result type alias for the wrapper
pub type Result<T> = std::result::Result<T, WrapperError>;

/// Error types for the wrapper
#[derive(Error, Debug)]
pub enum WrapperError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to launch {binary}: {source}")]
    Launch {
        binary: String,
        #[source]
        source: std::io::Error,
    },
}

impl WrapperError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new launch error for the given binary
    pub fn launch(binary: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            binary: binary.into(),
            source,
        }
    }

    /// Process exit status the wrapper reports when it fails on its own side.
    ///
    /// Follows the shell conventions: 127 for a missing binary, 126 for one
    /// that cannot be executed.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Launch { source, .. } => match source.kind() {
                ErrorKind::NotFound => 127,
                ErrorKind::PermissionDenied => 126,
                _ => 1,
            },
            Self::Config(_) => 2,
        }
    }
}
