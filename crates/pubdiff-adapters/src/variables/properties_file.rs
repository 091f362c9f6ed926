//! `NAME=value` properties file, one assignment per line.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use pubdiff_core::{
    application::{ApplicationError, ports::VariableSink},
    error::{PubdiffError, PubdiffResult},
};

/// Assigns variables by rewriting a properties file.
///
/// An existing `NAME=` line is replaced in place; otherwise the assignment
/// is appended. Other lines, comments included, are preserved.
#[derive(Debug, Clone)]
pub struct PropertiesFileSink {
    path: PathBuf,
}

impl PropertiesFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VariableSink for PropertiesFileSink {
    fn set(&self, name: &str, value: &str) -> PubdiffResult<()> {
        let existing = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(map_io_error(&self.path, e)),
        };

        let assignment = format!("{name}={value}");
        let mut replaced = false;
        let mut lines: Vec<String> = existing
            .lines()
            .map(|line| {
                let key = line.split_once('=').map(|(k, _)| k.trim());
                if !replaced && key == Some(name) {
                    replaced = true;
                    assignment.clone()
                } else {
                    line.to_string()
                }
            })
            .collect();
        if !replaced {
            lines.push(assignment);
        }

        let mut text = lines.join("\n");
        text.push('\n');
        fs::write(&self.path, text).map_err(|e| map_io_error(&self.path, e))?;

        debug!(path = %self.path.display(), name, replaced, "variable assigned");
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error) -> PubdiffError {
    ApplicationError::ReportWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
