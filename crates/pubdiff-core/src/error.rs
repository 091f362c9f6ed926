//! The error every public core entry point returns.
//!
//! Domain failures mean the descriptors themselves are wrong; application
//! failures happen at a port. Callers mostly care which bucket an error
//! falls in, so [`PubdiffError::category`] collapses both layers into one
//! [`ErrorCategory`].

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

#[derive(Debug, Error, Clone)]
pub enum PubdiffError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl PubdiffError {
    /// Hints for the user, most specific first.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                domain::ErrorCategory::Validation => ErrorCategory::Validation,
                domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Coarse classification a front end maps onto exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A descriptor or argument is malformed.
    Validation,
    /// A descriptor path or a requested type does not exist.
    NotFound,
    Internal,
}

pub type PubdiffResult<T> = Result<T, PubdiffError>;
