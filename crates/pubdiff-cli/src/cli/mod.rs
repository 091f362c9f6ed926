//! CLI argument definitions using the clap derive API.
//!
//! Argument names, aliases, help text and value enums live here and nowhere
//! else.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pubdiff",
    bin_name = "pubdiff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Compare the public interface of two builds",
    long_about = "pubdiff lists the externally visible members that exist in \
                  one build of a library but have no structural counterpart \
                  in the other.",
    after_help = "EXAMPLES:\n\
        \x20 pubdiff compare --baseline api/v1.toml --challenger api/v2.toml\n\
        \x20 pubdiff compare -b old/ -n new/ --report api-changes.txt --fail-on-differences\n\
        \x20 pubdiff inspect api/v2.toml --type Acme.Widget\n\
        \x20 pubdiff completions bash > /usr/share/bash-completion/completions/pubdiff",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare a baseline build against a challenger build.
    #[command(
        visible_alias = "cmp",
        about = "Compare two public interfaces",
        after_help = "EXAMPLES:\n\
            \x20 pubdiff compare --baseline v1.toml --challenger v2.toml\n\
            \x20 pubdiff compare -b v1/ -n v2/ --property api.changes --variables-file build.properties\n\
            \x20 pubdiff compare -b v1.json -n v2.json --output-format json"
    )]
    Compare(CompareArgs),

    /// Show the visible surface of one build.
    #[command(
        visible_alias = "ls",
        about = "List visible types and members",
        after_help = "EXAMPLES:\n\
            \x20 pubdiff inspect v2.toml\n\
            \x20 pubdiff inspect v2.toml --type Textile.Blocks.CodeBlockModifier"
    )]
    Inspect(InspectArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pubdiff init\n\
            \x20 pubdiff init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pubdiff completions bash > ~/.local/share/bash-completion/completions/pubdiff\n\
            \x20 pubdiff completions zsh  > ~/.zfunc/_pubdiff\n\
            \x20 pubdiff completions fish > ~/.config/fish/completions/pubdiff.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the active configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pubdiff config get compare.property\n\
            \x20 pubdiff config list\n\
            \x20 pubdiff config path"
    )]
    Config(ConfigCommands),
}

// ── compare ───────────────────────────────────────────────────────────────────

/// Arguments for `pubdiff compare`.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Descriptor file or directory of the reference build.
    #[arg(
        short = 'b',
        long = "baseline",
        value_name = "PATH",
        help = "Baseline descriptor (file or directory)"
    )]
    pub baseline: PathBuf,

    /// Descriptor file or directory of the candidate build.
    #[arg(
        short = 'n',
        long = "challenger",
        value_name = "PATH",
        help = "Challenger descriptor (file or directory)"
    )]
    pub challenger: PathBuf,

    /// Write one line per difference to this file.
    #[arg(
        short = 'r',
        long = "report",
        value_name = "FILE",
        help = "Write the difference report to FILE"
    )]
    pub report: Option<PathBuf>,

    /// Name under which the difference count is published.
    #[arg(
        short = 'p',
        long = "property",
        value_name = "NAME",
        help = "Publish the difference count as NAME"
    )]
    pub property: Option<String>,

    /// `NAME=value` file that receives the count instead of stdout.
    #[arg(
        long = "variables-file",
        value_name = "FILE",
        requires = "property",
        help = "Store the published count in FILE"
    )]
    pub variables_file: Option<PathBuf>,

    /// Exit with status 5 when any difference is found.
    #[arg(
        long = "fail-on-differences",
        help = "Exit with a non-zero status when differences are found"
    )]
    pub fail_on_differences: bool,
}

// ── inspect ───────────────────────────────────────────────────────────────────

/// Arguments for `pubdiff inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    #[arg(value_name = "PATH", help = "Descriptor file or directory")]
    pub path: PathBuf,

    /// Show a single type (nested types use `Outer+Inner`).
    #[arg(
        short = 't',
        long = "type",
        value_name = "FULL_NAME",
        help = "Only show this type"
    )]
    pub type_name: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pubdiff init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing config")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pubdiff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Target shell")]
    pub shell: Shell,
}

/// Supported shells.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// `pubdiff config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one configuration value.
    Get {
        #[arg(value_name = "KEY", help = "Dotted key, e.g. compare.property")]
        key: String,
    },

    /// Print the effective configuration as TOML.
    List,

    /// Print the default configuration file path.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
