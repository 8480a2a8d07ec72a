//! JSON file persistence
//!
//! Keeps the collection in `data/transactions.json` and settings in
//! `settings.json`. On first run the bundled seed ledger is written out.

use tracing::{debug, info};

use crate::config::{LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};
use super::Persistence;

const SEED_DATA: &str = include_str!("../../data/seed.json");

/// Persistence backed by JSON files under the ledger base directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    paths: LedgerPaths,
    seed: Option<&'static str>,
}

impl JsonFileStore {
    /// Create a store that seeds an empty ledger with the bundled sample data
    pub fn new(paths: LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;
        Ok(Self {
            paths,
            seed: Some(SEED_DATA),
        })
    }

    /// Create a store that starts empty when no ledger file exists
    pub fn without_seed(paths: LedgerPaths) -> LedgerResult<Self> {
        let mut store = Self::new(paths)?;
        store.seed = None;
        Ok(store)
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    fn load_seed(&self) -> LedgerResult<Vec<Transaction>> {
        let Some(seed) = self.seed else {
            return Ok(Vec::new());
        };

        let records: Vec<Transaction> = serde_json::from_str(seed)
            .map_err(|e| LedgerError::Persistence(format!("Failed to parse seed data: {}", e)))?;

        if !records.is_empty() {
            self.save(&records)?;
            info!(count = records.len(), "Seeded new ledger");
        }
        Ok(records)
    }
}

impl Persistence for JsonFileStore {
    fn load(&self) -> LedgerResult<Vec<Transaction>> {
        let path = self.paths.transactions_file();
        match read_json(&path)? {
            Some(records) => {
                debug!(path = %path.display(), "Loaded ledger");
                Ok(records)
            }
            None => self.load_seed(),
        }
    }

    fn save(&self, records: &[Transaction]) -> LedgerResult<()> {
        write_json_atomic(self.paths.transactions_file(), records)
    }

    fn load_settings(&self) -> LedgerResult<Settings> {
        Ok(read_json(self.paths.settings_file())?.unwrap_or_default())
    }

    fn save_settings(&self, settings: &Settings) -> LedgerResult<()> {
        write_json_atomic(self.paths.settings_file(), settings)
    }
}
