//! Error handling for the pubdiff CLI.
//!
//! Every failure that reaches `main` is a [`CliError`], which knows its
//! suggestions, its category and the process exit code.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use pubdiff_core::error::{ErrorCategory as CoreCategory, PubdiffError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `pubdiff-core` or an adapter.
    #[error("Comparison failed: {0}")]
    Core(#[from] PubdiffError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The comparison succeeded but `--fail-on-differences` was set.
    #[error("{count} public interface difference(s) found")]
    DifferencesFound { count: usize },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Run 'pubdiff config path' to locate the config file".into(),
                "Run 'pubdiff init --force' to regenerate a default config".into(),
            ],
            Self::Core(err) => err.suggestions(),
            Self::IoError { .. } => vec![
                "Check file permissions and available disk space".into(),
            ],
            Self::DifferencesFound { .. } => vec![
                "Review the report; removed members break existing callers".into(),
                "Drop --fail-on-differences to report without failing".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(err) => match err.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::DifferencesFound { .. } => ErrorCategory::Differences,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Differences => 5,
        }
    }

    /// Messages of the source chain, outermost first.
    fn causes(&self) -> Vec<String> {
        std::iter::successors(self.source(), |err| (*err).source())
            .map(ToString::to_string)
            .collect()
    }

    /// Render for a terminal: red message, dimmed causes, yellow suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = format!(
            "\n{} {}\n\n  {}\n",
            "\u{2717}".red().bold(),
            "Error:".red().bold(),
            self.to_string().red()
        );
        if verbose {
            for cause in self.causes() {
                out += &format!("\n  {} {}\n", "\u{2192}".dimmed(), cause.dimmed());
            }
        }
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out += &format!("\n{}\n", "Suggestions:".yellow().bold());
            out.extend(suggestions.iter().map(|s| format!("  {s}\n")));
        }
        if !verbose {
            out += &format!(
                "\n{} {}\n",
                "\u{2139}".blue(),
                "Run again with -v for the underlying cause.".dimmed()
            );
        }
        out
    }

    /// Same layout as [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");
        if verbose {
            out.extend(self.causes().iter().map(|c| format!("  Caused by: {c}\n")));
        }
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out += "\nSuggestions:\n";
            out.extend(suggestions.iter().map(|s| format!("  {s}\n")));
        }
        if !verbose {
            out += "\nRun again with -v for the underlying cause.\n";
        }
        out
    }

    /// Emit a tracing event at the severity of this error.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
            ErrorCategory::Differences => tracing::info!("{}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
    /// Not a failure of the tool; the builds differ.
    Differences,
}

/// Attach a context message to a foreign error at the call-site.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use pubdiff_core::application::ApplicationError;
    use pubdiff_core::domain::DomainError;

    use super::*;

    #[test]
    fn exit_code_user_error() {
        let err = CliError::InvalidInput {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn exit_code_differences() {
        assert_eq!(CliError::DifferencesFound { count: 3 }.exit_code(), 5);
    }

    #[test]
    fn missing_descriptor_is_not_found() {
        let err = CliError::from(PubdiffError::from(ApplicationError::DescriptorLoad {
            path: PathBuf::from("v1.toml"),
            reason: "no such file".into(),
        }));
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn malformed_descriptor_is_user_error() {
        let err = CliError::from(PubdiffError::from(DomainError::InvalidDescriptor(
            "v1.toml: expected table".into(),
        )));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn differences_message_and_suggestions() {
        let err = CliError::DifferencesFound { count: 14 };
        assert_eq!(err.to_string(), "14 public interface difference(s) found");
        assert!(err
            .suggestions()
            .iter()
            .any(|s| s.contains("--fail-on-differences")));
    }

    #[test]
    fn format_plain_contains_header_and_suggestions() {
        let s = CliError::DifferencesFound { count: 1 }.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("-v for the underlying cause"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::IoError {
            message: "writing report".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("underlying cause"));
    }

    #[derive(Debug, Error)]
    #[error("parsing config.toml")]
    struct ParseFailure(#[source] io::Error);

    #[test]
    fn verbose_output_walks_the_whole_chain() {
        let err = CliError::ConfigError {
            message: "load failed".into(),
            source: Some(Box::new(ParseFailure(io::Error::other("permission denied")))),
        };
        assert_eq!(err.causes(), vec!["parsing config.toml", "permission denied"]);
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: parsing config.toml"));
        assert!(s.contains("Caused by: permission denied"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { message, .. }) if message == "reading config"));
    }
}
