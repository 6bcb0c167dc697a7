//! Error types for arcbathy.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! Every variant falls into one of two families: I/O problems (the file is
//! missing, unreadable or truncated) and format problems (the content does
//! not describe a valid ARC ASCII grid).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for arcbathy operations.
pub type Result<T> = std::result::Result<T, BathyError>;

/// Errors that can occur while loading a bathymetry grid.
#[derive(Debug, Error)]
pub enum BathyError {
    /// The requested file does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before a required section was complete.
    #[error("Unexpected end of file in {section} at line {line}")]
    UnexpectedEof { section: &'static str, line: usize },

    /// A required header key was not found where expected.
    #[error("Format error: missing key {key} at line {line}")]
    MissingKey { key: &'static str, line: usize },

    /// A header line carried a key that is not part of the format.
    #[error("Format error: unknown key '{key}' at line {line}")]
    UnknownKey { key: String, line: usize },

    /// A header value or data token could not be parsed as a number.
    #[error("Format error: {field} value '{value}' is not numeric (line {line})")]
    NotNumeric {
        field: String,
        value: String,
        line: usize,
    },

    /// Header values parsed but violate the format constraints.
    #[error("Format error: invalid header: {0}")]
    InvalidHeader(String),

    /// The data section holds a different number of tokens than declared.
    #[error("Format error: token count mismatch (expected {expected}, found {found})")]
    TokenCountMismatch { expected: usize, found: usize },

    /// Axes and values handed to the grid do not agree.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Load options are out of range.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl BathyError {
    /// Create a FileOpen error, mapping `NotFound` onto [`BathyError::FileNotFound`].
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileOpen { path, source }
        }
    }

    /// Create a NotNumeric error.
    pub fn not_numeric(field: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self::NotNumeric {
            field: field.into(),
            value: value.into(),
            line,
        }
    }

    /// Create an UnknownKey error.
    pub fn unknown_key(key: impl Into<String>, line: usize) -> Self {
        Self::UnknownKey {
            key: key.into(),
            line,
        }
    }

    /// Create an InvalidHeader error.
    pub fn invalid_header(reason: impl Into<String>) -> Self {
        Self::InvalidHeader(reason.into())
    }

    /// True when the content is malformed (as opposed to unreadable).
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::MissingKey { .. }
                | Self::UnknownKey { .. }
                | Self::NotNumeric { .. }
                | Self::InvalidHeader(_)
                | Self::TokenCountMismatch { .. }
                | Self::InvalidGrid(_)
        )
    }

    /// True when the file could not be found, opened or fully read.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::FileOpen { .. }
                | Self::Io(_)
                | Self::UnexpectedEof { .. }
        )
    }
}
