// ============================================================================
// domain/error.rs - DESCRIPTOR AND COMPARISON ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::MemberKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so callers can stash and re-report them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Invalid arguments (caller bugs)
    // ========================================================================
    #[error("Parameter '{argument}' is an unsupported member kind: {kind}")]
    UnsupportedMember {
        argument: &'static str,
        kind: MemberKind,
    },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Invalid type reference '{value}': {reason}")]
    InvalidTypeReference { value: String, reason: String },

    #[error("Unknown visibility '{value}'")]
    InvalidVisibility { value: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedMember { kind, .. } => vec![
                format!("'{kind}' members cannot be compared directly"),
                "Compare types with compare_types and properties with properties_equal".into(),
            ],
            Self::InvalidDescriptor(msg) => vec![
                "Check the descriptor file against the documented format".into(),
                format!("Details: {msg}"),
            ],
            Self::InvalidTypeReference { value, .. } => vec![
                format!("'{value}' is not a valid type reference"),
                "Use a namespace-qualified name, e.g. System.String".into(),
                "Generic arguments go in angle brackets: List<System.String>".into(),
            ],
            Self::InvalidVisibility { .. } => vec![
                "Valid visibilities: public, protected, protected-internal, internal, \
                 private-protected, private"
                    .into(),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Add the '{field}' field to the descriptor")]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedMember { .. } => ErrorCategory::Internal,
            Self::InvalidDescriptor(_)
            | Self::InvalidTypeReference { .. }
            | Self::InvalidVisibility { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
