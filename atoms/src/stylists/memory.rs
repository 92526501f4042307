use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::model::{StylistRecord, UpdateStylistPayload};
use super::store::{StoreError, StylistStore};

/// In-process store keeping insertion order. Used for tests and local runs.
#[derive(Default)]
pub struct MemoryStylistStore {
    records: Mutex<Vec<StylistRecord>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed documents as-is, bypassing the one-per-identity check
    pub fn with_records(records: Vec<StylistRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<StylistRecord> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<StylistRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_reads(&self) -> Result<(), StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("read unavailable".to_string()));
        }
        Ok(())
    }

    fn check_writes(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("write unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl StylistStore for MemoryStylistStore {
    async fn create(&self, record: &StylistRecord) -> Result<(), StoreError> {
        self.check_writes()?;
        let mut records = self.lock();
        if records.iter().any(|r| r.id == record.id) {
            return Err(StoreError::AlreadyExists(record.id.clone()));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<StylistRecord>, StoreError> {
        self.check_reads()?;
        Ok(self.lock().iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<StylistRecord>, StoreError> {
        self.check_reads()?;
        Ok(self.snapshot())
    }

    async fn update_fields(&self, id: &str, patch: &UpdateStylistPayload) -> Result<(), StoreError> {
        self.check_writes()?;
        let mut records = self.lock();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.apply(patch);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.check_writes()?;
        let mut records = self.lock();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
