//! Storage layer for the ledger
//!
//! The ledger store talks to durable storage only through the
//! [`Persistence`] trait. Two logical namespaces are kept: one for the
//! transaction collection and one for settings.

pub mod file_io;
pub mod json_store;
pub mod memory;

pub use file_io::{read_json, write_json_atomic};
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::Transaction;

/// Durable storage for the ledger
///
/// Implementations are free to choose the medium; the store only relies on
/// `load` returning the collection in its saved order.
pub trait Persistence {
    /// Load the transaction collection, falling back to seed data when no
    /// prior state exists
    fn load(&self) -> LedgerResult<Vec<Transaction>>;

    /// Replace the persisted collection
    fn save(&self, records: &[Transaction]) -> LedgerResult<()>;

    /// Load settings, or defaults when none were saved
    fn load_settings(&self) -> LedgerResult<Settings>;

    fn save_settings(&self, settings: &Settings) -> LedgerResult<()>;
}
