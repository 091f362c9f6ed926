//! Build-variable sinks.

mod memory;
mod properties_file;

pub use memory::MemoryVariableSink;
pub use properties_file::PropertiesFileSink;
