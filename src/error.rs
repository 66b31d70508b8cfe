//! Centralized error types for throwbox.
//!
//! Only the I/O and parsing boundaries fail. Decoding and reconciliation
//! degrade to empty values instead of returning errors.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the throwbox library.
#[derive(Error, Debug)]
pub enum ThrowboxError {
    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The specified file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A mailbox listing could not be decoded.
    #[error("Invalid mailbox listing: {0}")]
    InvalidListing(String),

    /// Raw message bytes could not be turned into a MIME tree.
    #[error("MIME decoding error: {0}")]
    MimeError(String),

    /// An export operation failed.
    #[error("Export error: {0}")]
    ExportError(String),

    /// An invalid path was provided.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Convenience alias for `Result<T, ThrowboxError>`.
pub type Result<T> = std::result::Result<T, ThrowboxError>;

impl ThrowboxError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Map a read failure, turning `NotFound` into [`ThrowboxError::FileNotFound`].
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(path)
        } else {
            Self::io(path, source)
        }
    }
}

/// Allow `?` on `std::io::Error` when no path context is available
/// (rare, prefer `ThrowboxError::io`).
impl From<std::io::Error> for ThrowboxError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            path: PathBuf::from("<unknown>"),
            source,
        }
    }
}

impl From<serde_json::Error> for ThrowboxError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidListing(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_maps_not_found() {
        let err = ThrowboxError::read(
            "/nope.eml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ThrowboxError::FileNotFound(p) if p == PathBuf::from("/nope.eml")));
    }

    #[test]
    fn test_read_keeps_other_io_errors() {
        let err = ThrowboxError::read(
            "/locked.eml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ThrowboxError::Io { .. }));
        assert!(err.to_string().contains("/locked.eml"));
    }

    #[test]
    fn test_json_error_becomes_invalid_listing() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ThrowboxError = json_err.into();
        assert!(matches!(err, ThrowboxError::InvalidListing(_)));
    }
}
