//! Report writer adapters.

mod file;
mod memory;

pub use file::FileReportWriter;
pub use memory::MemoryReportWriter;
