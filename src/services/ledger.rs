//! Ledger store
//!
//! Owns the transaction collection and the settings. Every mutation is built
//! on a copy of the collection, persisted, and only then swapped in, so a
//! failed save leaves both the in-memory and the persisted ledger untouched.

use std::collections::HashSet;

use tracing::{debug, error, info, warn};

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionDraft, TransactionId, TransactionPatch};
use crate::storage::Persistence;

use super::import::parse_import;
use super::sort::{sort_records, SortField};

/// The transaction collection and its persistence
pub struct Ledger<P: Persistence> {
    persistence: P,
    records: Vec<Transaction>,
    settings: Settings,
}

impl<P: Persistence> Ledger<P> {
    /// Load the ledger and settings.
    ///
    /// Load failures are logged and the ledger starts empty (or with default
    /// settings) rather than failing.
    pub fn open(persistence: P) -> Self {
        let records = match persistence.load() {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "Failed to load transactions, starting with an empty ledger");
                Vec::new()
            }
        };

        let settings = match persistence.load_settings() {
            Ok(settings) => match settings.validate() {
                Ok(()) => settings,
                Err(e) => {
                    warn!(error = %e, "Stored settings are invalid, using defaults");
                    Settings::default()
                }
            },
            Err(e) => {
                warn!(error = %e, "Failed to load settings, using defaults");
                Settings::default()
            }
        };

        debug!(count = records.len(), "Ledger opened");
        Self {
            persistence,
            records,
            settings,
        }
    }

    /// Current collection in stored order (newest first by default)
    pub fn snapshot(&self) -> &[Transaction] {
        &self.records
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.records.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Store a validated draft at the front of the ledger
    pub fn create(&mut self, draft: TransactionDraft) -> LedgerResult<Transaction> {
        let mut txn = Transaction::new(draft);
        while self.get(&txn.id).is_some() {
            txn.id = TransactionId::generate();
        }

        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(txn.clone());
        records.extend(self.records.iter().cloned());
        self.commit(records)?;

        info!(id = %txn.id, "Created transaction");
        Ok(txn)
    }

    /// Merge `patch` into an existing transaction
    pub fn update(
        &mut self,
        id: &TransactionId,
        patch: TransactionPatch,
    ) -> LedgerResult<Transaction> {
        let index = self
            .records
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| LedgerError::transaction_not_found(id.as_str()))?;

        let mut records = self.records.clone();
        records[index].apply(patch);
        let updated = records[index].clone();
        self.commit(records)?;

        info!(id = %updated.id, "Updated transaction");
        Ok(updated)
    }

    /// Remove a transaction; removing an absent id is not an error.
    ///
    /// Returns whether a record was removed.
    pub fn remove(&mut self, id: &TransactionId) -> LedgerResult<bool> {
        let records: Vec<_> = self.records.iter().filter(|t| &t.id != id).cloned().collect();
        let removed = records.len() != self.records.len();
        self.commit(records)?;

        if removed {
            info!(id = %id, "Removed transaction");
        }
        Ok(removed)
    }

    /// Delete every transaction
    pub fn clear(&mut self) -> LedgerResult<()> {
        let count = self.records.len();
        self.commit(Vec::new())?;
        info!(count, "Cleared ledger");
        Ok(())
    }

    /// Replace the whole collection, as done by import and restore
    pub fn replace_all(&mut self, records: Vec<Transaction>) -> LedgerResult<()> {
        if let Some(dup) = find_duplicate_id(&records) {
            return Err(LedgerError::MalformedImport(format!(
                "Duplicate transaction id: {}",
                dup
            )));
        }

        let count = records.len();
        self.commit(records)?;
        info!(count, "Replaced ledger");
        Ok(())
    }

    /// Import a JSON backup, replacing the collection. Returns the number of
    /// imported transactions.
    pub fn import_json(&mut self, text: &str) -> LedgerResult<usize> {
        let records = parse_import(text)?;
        let count = records.len();
        self.replace_all(records)?;
        Ok(count)
    }

    /// Reorder the stored collection; the new order is not persisted
    pub fn sort(&mut self, field: SortField, ascending: bool) {
        sort_records(&mut self.records, field, ascending);
    }

    /// Validate, persist and apply new settings
    pub fn save_settings(&mut self, settings: Settings) -> LedgerResult<()> {
        settings.validate()?;
        self.persistence.save_settings(&settings).map_err(|e| {
            error!(error = %e, "Failed to save settings");
            into_persistence(e)
        })?;
        self.settings = settings;
        info!("Saved settings");
        Ok(())
    }

    fn commit(&mut self, records: Vec<Transaction>) -> LedgerResult<()> {
        self.persistence.save(&records).map_err(|e| {
            error!(error = %e, "Failed to save ledger, change discarded");
            into_persistence(e)
        })?;
        self.records = records;
        Ok(())
    }
}

fn find_duplicate_id(records: &[Transaction]) -> Option<TransactionId> {
    let mut seen = HashSet::new();
    records
        .iter()
        .find(|t| !seen.insert(&t.id))
        .map(|t| t.id.clone())
}

fn into_persistence(err: LedgerError) -> LedgerError {
    match err {
        LedgerError::Persistence(_) => err,
        other => LedgerError::Persistence(other.to_string()),
    }
}
