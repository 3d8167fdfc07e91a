//! Backend error types.

use std::path::PathBuf;

use cubetrack_spec::{BackendError, SpecError, ValidationError};
use thiserror::Error;

/// Errors raised while reading a signature file.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// The resolved signature path does not exist.
    #[error("signature file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// A cell is not a boolean literal.
    #[error("invalid signature cell '{token}' at line {line}, column {column}: expected 'true' or 'false'")]
    Format {
        /// 1-based line number.
        line: usize,
        /// 1-based cell index within the line.
        column: usize,
        token: String,
    },

    /// Any other read failure.
    #[error("failed to read signature file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BackendError for SignatureError {
    fn code(&self) -> &'static str {
        match self {
            SignatureError::NotFound { .. } => "SIGNATURE_001",
            SignatureError::Format { .. } => "SIGNATURE_002",
            SignatureError::Io { .. } => "SIGNATURE_003",
        }
    }

    fn category(&self) -> &'static str {
        "signature"
    }
}

/// Error type for track generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Signature mode was requested but no path is configured.
    #[error("signature generation requires signature_file_path")]
    MissingSignaturePath,

    /// The configuration failed validation.
    #[error("invalid configuration: {}", format_errors(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// Reading or parsing the signature file failed.
    #[error(transparent)]
    Signature(#[from] SignatureError),

    /// The generated cubes could not be encoded for hashing.
    #[error("failed to hash generated cubes: {0}")]
    Hash(#[from] SpecError),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::MissingSignaturePath => "TRACK_001",
            GenerateError::InvalidConfig(_) => "TRACK_002",
            GenerateError::Hash(_) => "TRACK_003",
            GenerateError::Signature(e) => e.code(),
        }
    }

    fn category(&self) -> &'static str {
        match self {
            GenerateError::Signature(e) => e.category(),
            _ => "track",
        }
    }
}
