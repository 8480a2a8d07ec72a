//! In-process persistence
//!
//! Holds the saved state in memory. Useful for embedding the ledger where no
//! file system is wanted, and for exercising the store in tests.

use std::sync::RwLock;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

use super::Persistence;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Transaction>>,
    settings: RwLock<Option<Settings>>,
    saves: RwLock<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already-saved collection
    pub fn with_records(records: Vec<Transaction>) -> Self {
        Self {
            records: RwLock::new(records),
            ..Self::default()
        }
    }

    /// The collection as last saved
    pub fn saved(&self) -> LedgerResult<Vec<Transaction>> {
        let records = self.records.read().map_err(|e| {
            LedgerError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(records.clone())
    }

    /// Number of collection saves performed
    pub fn save_count(&self) -> usize {
        self.saves.read().map(|n| *n).unwrap_or_default()
    }
}

impl Persistence for MemoryStore {
    fn load(&self) -> LedgerResult<Vec<Transaction>> {
        self.saved()
    }

    fn save(&self, records: &[Transaction]) -> LedgerResult<()> {
        let mut stored = self.records.write().map_err(|e| {
            LedgerError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;
        *stored = records.to_vec();

        if let Ok(mut saves) = self.saves.write() {
            *saves += 1;
        }
        Ok(())
    }

    fn load_settings(&self) -> LedgerResult<Settings> {
        let settings = self.settings.read().map_err(|e| {
            LedgerError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(settings.clone().unwrap_or_default())
    }

    fn save_settings(&self, settings: &Settings) -> LedgerResult<()> {
        let mut stored = self.settings.write().map_err(|e| {
            LedgerError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;
        *stored = Some(settings.clone());
        Ok(())
    }
}
