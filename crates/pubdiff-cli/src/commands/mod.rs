//! Command handlers, one module per subcommand.

pub mod compare;
pub mod completions;
pub mod config;
pub mod init;
pub mod inspect;

use pubdiff_adapters::FilesystemDescriptorLoader;
use pubdiff_core::application::ComparisonService;

/// The service every descriptor-reading command runs against.
pub(crate) fn comparison_service() -> ComparisonService {
    ComparisonService::new(Box::new(FilesystemDescriptorLoader::new()))
}
