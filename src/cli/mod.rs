//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger store.

pub mod export;
pub mod report;
pub mod settings;
pub mod transaction;

pub use export::{handle_data_command, DataCommands};
pub use report::handle_dashboard_command;
pub use settings::{handle_settings_command, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
