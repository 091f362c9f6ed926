//! Plain-text report file.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use pubdiff_core::{
    application::{ApplicationError, ports::ReportWriter},
    error::{PubdiffError, PubdiffResult},
};

/// Writes one difference per line to a file.
///
/// The file is created (or truncated) up front, so a run with no
/// differences still leaves an empty report behind.
#[derive(Debug)]
pub struct FileReportWriter {
    path: PathBuf,
    out: Mutex<BufWriter<File>>,
}

impl FileReportWriter {
    pub fn create(path: impl Into<PathBuf>) -> PubdiffResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| map_io_error(&path, e))?;
        }
        let file = File::create(&path).map_err(|e| map_io_error(&path, e))?;
        Ok(Self {
            path,
            out: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for FileReportWriter {
    fn write_line(&self, line: &str) -> PubdiffResult<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| ApplicationError::SinkLockError)?;
        writeln!(out, "{line}").map_err(|e| map_io_error(&self.path, e))
    }

    fn finish(&self) -> PubdiffResult<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| ApplicationError::SinkLockError)?;
        out.flush().map_err(|e| map_io_error(&self.path, e))
    }
}

fn map_io_error(path: &Path, e: io::Error) -> PubdiffError {
    ApplicationError::ReportWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_lines_in_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("reports").join("pubdiff.txt");

        let writer = FileReportWriter::create(&path).unwrap();
        writer.write_line("Acme.Widget Void Spin()").unwrap();
        writer.write_line("Acme.Gear").unwrap();
        writer.finish().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Acme.Widget Void Spin()\nAcme.Gear\n"
        );
    }

    #[test]
    fn empty_report_still_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.txt");

        FileReportWriter::create(&path).unwrap().finish().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
