//! Display formatting for terminal output
//!
//! Turns ledger records and report structures into printable text.

pub mod report;
pub mod transaction;

pub use report::format_dashboard;
pub use transaction::{format_transaction_details, format_transaction_register};
