//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use pubdiff_core::domain::{ChangeKind, Difference};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes command results to stdout according to the resolved format.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// An explicit `--output-format` wins over `output.format` from config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            OutputFormat::from_config(&config.output.format)
        } else {
            args.output_format
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Machine-readable result (JSON, `NAME=value`); never suppressed.
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// One difference, prefixed `-` or `+`.
    pub fn difference(&self, difference: &Difference) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = difference.to_string();
        let line = match (self.no_color, difference.change) {
            (true, _) => line,
            (false, ChangeKind::Removed) => line.red().to_string(),
            (false, ChangeKind::Added) => line.green().to_string(),
        };
        self.term.write_line(&line)
    }

    /// `✓ <msg>` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.indicator('\u{2713}', msg, Paint::Green)
    }

    /// `⚠ <msg>` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.indicator('\u{26a0}', msg, Paint::Yellow)
    }

    /// `ℹ <msg>` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.indicator('\u{2139}', msg, Paint::Blue)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    fn indicator(&self, glyph: char, msg: &str, paint: Paint) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.no_color {
            return self.term.write_line(&format!("{glyph} {msg}"));
        }
        let glyph = glyph.to_string();
        let line = match paint {
            Paint::Green => format!("{} {}", glyph.green().bold(), msg.green()),
            Paint::Yellow => format!("{} {}", glyph.yellow().bold(), msg.yellow()),
            Paint::Blue => format!("{} {}", glyph.blue().bold(), msg.blue()),
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

#[derive(Clone, Copy)]
enum Paint {
    Green,
    Yellow,
    Blue,
}
