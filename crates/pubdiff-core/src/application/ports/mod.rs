//! Application ports (traits) for external dependencies.
//!
//! Adapters in `pubdiff-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `DescriptorSource`: Load an assembly descriptor
//!   - `ReportWriter`: Receive one report line per difference
//!   - `VariableSink`: Receive the difference count as a build variable
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DescriptorSource, ReportWriter, VariableSink};
