/// Import failure reported by the texture importer

use std::fmt;

/// Category of an import failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportErrorKind {
    /// The file does not exist (or the catalog has no file for the selection)
    FileNotFound,
    /// The file exists but could not be read
    FileIo,
    /// The container format could not be identified
    UnknownFileFormat,
    /// The container was recognized but its pixel format is not supported
    UnsupportedFormat,
    /// The file content is malformed or truncated
    InvalidData,
    /// Allocation failed while decoding
    OutOfMemory,
    /// Any other importer-specific failure
    Other,
}

impl ImportErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportErrorKind::FileNotFound => "FileNotFound",
            ImportErrorKind::FileIo => "FileIo",
            ImportErrorKind::UnknownFileFormat => "UnknownFileFormat",
            ImportErrorKind::UnsupportedFormat => "UnsupportedFormat",
            ImportErrorKind::InvalidData => "InvalidData",
            ImportErrorKind::OutOfMemory => "OutOfMemory",
            ImportErrorKind::Other => "Other",
        }
    }
}

/// Decode failure: category plus importer message, kept for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportError {
    pub kind: ImportErrorKind,
    pub message: String,
}

impl ImportError {
    pub fn new(kind: ImportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for ImportError {}
