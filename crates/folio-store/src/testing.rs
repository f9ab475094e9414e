use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{StoreError, StoreResult};
use crate::storage::{KeyValueStorage, MemoryStorage};

/// Memory storage whose writes can be switched to fail.
#[derive(Debug, Default)]
pub struct FailingStorage {
    inner: MemoryStorage,
    fail_writes: AtomicBool,
}

impl FailingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other("disk full")));
        }
        Ok(())
    }
}

impl KeyValueStorage for FailingStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.check()?;
        self.inner.remove(key)
    }
}
