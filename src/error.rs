//! Error types for abxref operations.
//!
//! This module defines [`AbxError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `AbxError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `AbxError::Other`) for unexpected errors
//! - Validation errors report every offending item, not just the first

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for abxref operations.
#[derive(Debug, Error)]
pub enum AbxError {
    /// Dataset file or directory not found at expected location.
    #[error("Dataset not found: {path}")]
    DatasetNotFound { path: PathBuf },

    /// Failed to parse a dataset file.
    #[error("Failed to parse dataset at {path}: {message}")]
    DatasetParseError { path: PathBuf, message: String },

    /// Dataset violates a structural invariant.
    #[error("Invalid dataset: {message}")]
    DatasetValidationError { message: String },

    /// One or more requested pathogen codes do not exist in the reference set.
    #[error("Unknown pathogen codes: {}", codes.join(", "))]
    UnknownPathogenCode { codes: Vec<String> },

    /// Requested antibiotic does not exist in the catalog.
    #[error("Unknown antibiotic: {name}")]
    UnknownAntibiotic { name: String },

    /// Requested empiric syndrome does not exist.
    #[error("Unknown syndrome: {name}")]
    UnknownSyndrome { name: String },

    /// Requested institution code does not exist.
    #[error("Unknown institution: {code}")]
    UnknownInstitution { code: String },

    /// Invalid user-supplied argument value.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for abxref operations.
pub type Result<T> = std::result::Result<T, AbxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_not_found_displays_path() {
        let err = AbxError::DatasetNotFound {
            path: PathBuf::from("/data/reference.yml"),
        };
        assert!(err.to_string().contains("/data/reference.yml"));
    }

    #[test]
    fn dataset_parse_error_displays_path_and_message() {
        let err = AbxError::DatasetParseError {
            path: PathBuf::from("/data/formulary.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/formulary.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn dataset_validation_error_displays_message() {
        let err = AbxError::DatasetValidationError {
            message: "duplicate range label".into(),
        };
        assert!(err.to_string().contains("duplicate range label"));
    }

    #[test]
    fn unknown_pathogen_code_lists_all_codes() {
        let err = AbxError::UnknownPathogenCode {
            codes: vec!["XYZ".into(), "ZZZ".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("XYZ"));
        assert!(msg.contains("ZZZ"));
    }

    #[test]
    fn unknown_antibiotic_displays_name() {
        let err = AbxError::UnknownAntibiotic {
            name: "Nonexistomycin".into(),
        };
        assert!(err.to_string().contains("Nonexistomycin"));
    }

    #[test]
    fn unknown_syndrome_displays_name() {
        let err = AbxError::UnknownSyndrome {
            name: "Imaginary Syndrome".into(),
        };
        assert!(err.to_string().contains("Imaginary Syndrome"));
    }

    #[test]
    fn unknown_institution_displays_code() {
        let err = AbxError::UnknownInstitution { code: "VGH".into() };
        assert!(err.to_string().contains("VGH"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AbxError = io_err.into();
        assert!(matches!(err, AbxError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(AbxError::UnknownAntibiotic { name: "test".into() })
        }
        assert!(returns_error().is_err());
    }
}
