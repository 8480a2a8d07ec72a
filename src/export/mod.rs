//! Export module
//!
//! Writes the transaction collection out in two formats:
//! - JSON: the stored records, re-importable with `ledger import`
//! - CSV: a spreadsheet view with amounts in the display currency

pub mod csv;
pub mod json;

pub use csv::{export_transactions_csv, CSV_HEADER};
pub use json::export_json;

use std::fmt;
use std::str::FromStr;

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("Unknown export format: {}", other)),
        }
    }
}
