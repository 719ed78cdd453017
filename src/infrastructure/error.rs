//! Infrastructure-level errors raised by the edit engine

use std::path::PathBuf;

use thiserror::Error;

/// Errors from decoding, editing or encoding an image.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("unsupported extension: {extension} (supported: {supported})")]
    UnsupportedExtension {
        extension: String,
        supported: String,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{0}")]
    InvalidGeometry(String),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl EngineError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
