//! pubdiff core - hexagonal architecture implementation
//!
//! This crate provides the descriptor model, the member-set differ, and the
//! application layer that drives a comparison through ports.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pubdiff-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ComparisonService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (DescriptorSource, ReportWriter, ...)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     pubdiff-adapters (Infrastructure)   │
//! │  (FilesystemDescriptorLoader, sinks)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (TypeRef, Member, differ, visibility) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pubdiff_core::domain::{AssemblyDescriptor, TypeDescriptor, TypeRef, compare_assemblies};
//!
//! let old = AssemblyDescriptor::new("Acme")
//!     .with_type(TypeDescriptor::new(TypeRef::of("Acme.Gear")));
//! let new = AssemblyDescriptor::new("Acme");
//!
//! for difference in compare_assemblies(&old, &new) {
//!     println!("{difference}");
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComparisonReport, ComparisonService, TypeListing,
        ports::{DescriptorSource, ReportWriter, VariableSink},
    };
    pub use crate::domain::{
        AssemblyDescriptor, ChangeKind, Difference, Member, MemberKind, MethodDescriptor,
        TypeDescriptor, TypeRef, Visibility,
    };
    pub use crate::error::{PubdiffError, PubdiffResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
