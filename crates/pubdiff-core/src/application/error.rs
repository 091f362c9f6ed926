//! Application layer errors.
//!
//! These errors represent failures at the ports, not comparison logic.
//! Comparison and descriptor errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a comparison.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Descriptor could not be found or read.
    #[error("Failed to load descriptor {path}: {reason}")]
    DescriptorLoad { path: PathBuf, reason: String },

    /// Report or variables file could not be written.
    #[error("Failed to write {path}: {reason}")]
    ReportWrite { path: PathBuf, reason: String },

    /// A shared sink's lock was poisoned.
    #[error("Output sink lock poisoned")]
    SinkLockError,

    /// A type named on the command line does not exist in the descriptor.
    #[error("Type '{name}' not found")]
    TypeNotFound { name: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DescriptorLoad { path, .. } => vec![
                format!("Check that {} exists and is readable", path.display()),
                "Descriptors must be .toml or .json files, or a directory of them".into(),
            ],
            Self::ReportWrite { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::SinkLockError => vec!["A previous write panicked; retry the command".into()],
            Self::TypeNotFound { .. } => vec![
                "Use the full name, e.g. Namespace.Outer+Inner".into(),
                "Try: pubdiff inspect <PATH> to list visible types".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DescriptorLoad { .. } | Self::TypeNotFound { .. } => ErrorCategory::NotFound,
            Self::ReportWrite { .. } | Self::SinkLockError => ErrorCategory::Internal,
        }
    }
}
