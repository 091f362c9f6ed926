//! In-memory report writer for testing.

use std::sync::{Arc, RwLock};

use pubdiff_core::{
    application::{ApplicationError, ports::ReportWriter},
    error::PubdiffResult,
};

/// Collects report lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryReportWriter {
    inner: Arc<RwLock<MemoryReportInner>>,
}

#[derive(Debug, Default)]
struct MemoryReportInner {
    lines: Vec<String>,
    finished: bool,
}

impl MemoryReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far (testing helper).
    pub fn lines(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|inner| inner.lines.clone())
            .unwrap_or_default()
    }

    /// Whether `finish` has been called.
    pub fn is_finished(&self) -> bool {
        self.inner.read().map(|inner| inner.finished).unwrap_or(false)
    }
}

impl ReportWriter for MemoryReportWriter {
    fn write_line(&self, line: &str) -> PubdiffResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SinkLockError)?;
        inner.lines.push(line.to_string());
        Ok(())
    }

    fn finish(&self) -> PubdiffResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SinkLockError)?;
        inner.finished = true;
        Ok(())
    }
}
