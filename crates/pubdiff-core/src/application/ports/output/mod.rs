//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::domain::AssemblyDescriptor;
use crate::error::PubdiffResult;

/// Port for loading assembly descriptors.
///
/// Implemented by:
/// - `pubdiff_adapters::FilesystemDescriptorLoader` (TOML/JSON files and directories)
pub trait DescriptorSource: Send + Sync {
    /// Load the descriptor at `location`.
    fn load(&self, location: &Path) -> PubdiffResult<AssemblyDescriptor>;
}

/// Port for difference reports.
///
/// Implemented by:
/// - `pubdiff_adapters::report::FileReportWriter` (plain text file)
/// - `pubdiff_adapters::report::MemoryReportWriter` (testing)
pub trait ReportWriter: Send + Sync {
    /// Append one line, without the trailing newline.
    fn write_line(&self, line: &str) -> PubdiffResult<()>;

    /// Flush buffered output. Called once after the last line.
    fn finish(&self) -> PubdiffResult<()>;
}

/// Port for build-variable assignment.
///
/// Implemented by:
/// - `pubdiff_adapters::variables::PropertiesFileSink` (`NAME=value` file)
/// - `pubdiff_adapters::variables::MemoryVariableSink` (testing)
pub trait VariableSink: Send + Sync {
    fn set(&self, name: &str, value: &str) -> PubdiffResult<()>;
}
