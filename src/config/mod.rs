//! Configuration module for the ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings (budget cap, display currency, conversion rates)

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
