//! Infrastructure adapters for pubdiff.
//!
//! This crate implements the ports defined in `pubdiff-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod descriptor_loader;
pub mod report;
pub mod variables;

// Re-export commonly used adapters
pub use descriptor_loader::{DescriptorFormat, FilesystemDescriptorLoader, parse_descriptor};
pub use report::{FileReportWriter, MemoryReportWriter};
pub use variables::{MemoryVariableSink, PropertiesFileSink};
