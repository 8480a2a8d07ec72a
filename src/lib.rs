//! ledger-cli - terminal personal finance ledger
//!
//! This library provides the core of a single-user spending ledger: a
//! validated, persisted collection of transactions with regex search,
//! sorting, currency display and spending analytics.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `validation`: Field rules applied before any edit reaches the ledger
//! - `models`: Transactions, money, ids and currencies
//! - `storage`: Persistence trait with JSON-file and in-memory backends
//! - `services`: The ledger store, sorting, search and import
//! - `reports`: Category totals, monthly trend and dashboard summary
//! - `export`: JSON and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `ledger` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger_cli::config::LedgerPaths;
//! use ledger_cli::services::Ledger;
//! use ledger_cli::storage::JsonFileStore;
//!
//! let store = JsonFileStore::new(LedgerPaths::new()?)?;
//! let ledger = Ledger::open(store);
//! println!("{} transactions", ledger.len());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{LedgerError, LedgerResult};
