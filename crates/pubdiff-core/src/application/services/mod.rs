//! Application services - orchestrate use cases.

pub mod comparison_service;

pub use comparison_service::{ComparisonReport, ComparisonService, TypeListing};
