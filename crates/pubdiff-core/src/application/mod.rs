//! Application layer for pubdiff.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ComparisonService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! comparison logic itself. All matching rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ComparisonReport, ComparisonService, TypeListing};

pub use ports::{DescriptorSource, ReportWriter, VariableSink};

pub use error::ApplicationError;
