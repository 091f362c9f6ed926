//! In-memory variable sink for testing.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use pubdiff_core::{
    application::{ApplicationError, ports::VariableSink},
    error::PubdiffResult,
};

#[derive(Debug, Clone, Default)]
pub struct MemoryVariableSink {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryVariableSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.inner.read().ok()?.get(name).cloned()
    }
}

impl VariableSink for MemoryVariableSink {
    fn set(&self, name: &str, value: &str) -> PubdiffResult<()> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::SinkLockError)?
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}
