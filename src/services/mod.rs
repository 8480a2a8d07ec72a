//! Service layer for the ledger
//!
//! The ledger store owns the transaction collection; sorting, search and
//! import work on snapshots and hand results back to it.

pub mod import;
pub mod ledger;
pub mod search;
pub mod sort;

pub use import::parse_import;
pub use ledger::Ledger;
pub use search::SearchMatcher;
pub use sort::{sort_records, sorted, SortField, SortState};
