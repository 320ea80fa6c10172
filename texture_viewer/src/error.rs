//! Error types for the texture viewer
//!
//! This module defines the error types used throughout the viewer,
//! including backend creation failures, descriptor slot exhaustion,
//! and texture import failures.

use std::fmt;
use crate::import::ImportError;

/// Result type for texture viewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Texture viewer errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (texture, view, pipeline or buffer creation)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, buffer, pipeline, etc.)
    InvalidResource(String),

    /// Initialization failed (descriptor table, fixed pipeline objects)
    InitializationFailed(String),

    /// No free shader-visible descriptor slot is left
    SlotExhausted,

    /// The import collaborator could not decode the selected file
    Import(ImportError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::SlotExhausted => write!(f, "Descriptor slots exhausted"),
            Error::Import(err) => write!(f, "Import error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<ImportError> for Error {
    fn from(err: ImportError) -> Self {
        Error::Import(err)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
