//! CLI commands for import and export
//!
//! Import replaces the whole ledger with a JSON backup; export writes the
//! ledger to a file as JSON or CSV.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_json, export_transactions_csv, ExportFormat};
use crate::services::Ledger;
use crate::storage::Persistence;

/// Import/export subcommands
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Replace all transactions with the contents of a JSON backup
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
    /// Export all transactions to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Write JSON on a single line
        #[arg(long)]
        compact: bool,
    },
}

/// Handle import/export commands
pub fn handle_data_command<P: Persistence>(
    ledger: &mut Ledger<P>,
    cmd: DataCommands,
) -> LedgerResult<()> {
    match cmd {
        DataCommands::Import { file } => handle_import(ledger, file),
        DataCommands::Export {
            output,
            format,
            compact,
        } => handle_export(ledger, output, format, compact),
    }
}

fn handle_import<P: Persistence>(ledger: &mut Ledger<P>, file: PathBuf) -> LedgerResult<()> {
    let text = fs::read_to_string(&file)
        .map_err(|e| LedgerError::Io(format!("Failed to read {}: {}", file.display(), e)))?;

    let previous = ledger.len();
    let count = ledger.import_json(&text)?;

    println!("Imported {} transactions from: {}", count, file.display());
    if previous > 0 {
        println!("Replaced {} existing transactions", previous);
    }
    Ok(())
}

fn handle_export<P: Persistence>(
    ledger: &Ledger<P>,
    output: PathBuf,
    format: ExportFormat,
    compact: bool,
) -> LedgerResult<()> {
    let file = File::create(&output).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => export_json(ledger.snapshot(), &mut writer, !compact)?,
        ExportFormat::Csv => export_transactions_csv(ledger.snapshot(), ledger.settings(), &mut writer)?,
    }
    writer.flush()?;

    println!(
        "Exported {} transactions to: {}",
        ledger.len(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionDraft};
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    fn seeded() -> Ledger<MemoryStore> {
        let txn = Transaction::new(TransactionDraft {
            description: "Lunch".into(),
            amount: Money::from_cents(1250),
            category: "Food".into(),
            date: "2024-01-05".into(),
        });
        Ledger::open(MemoryStore::with_records(vec![txn]))
    }

    #[test]
    fn test_export_then_import() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("backup.json");

        let mut source = seeded();
        handle_data_command(
            &mut source,
            DataCommands::Export {
                output: path.clone(),
                format: ExportFormat::Json,
                compact: false,
            },
        )
        .unwrap();

        let mut target = Ledger::open(MemoryStore::new());
        handle_data_command(&mut target, DataCommands::Import { file: path }).unwrap();
        assert_eq!(target.snapshot(), source.snapshot());
    }

    #[test]
    fn test_export_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        handle_data_command(
            &mut seeded(),
            DataCommands::Export {
                output: path.clone(),
                format: ExportFormat::Csv,
                compact: false,
            },
        )
        .unwrap();

        let text = fs::read_to_string(path).unwrap();
        assert!(text.starts_with("Date,Description,Amount,Category\n"));
        assert!(text.contains("2024-01-05,Lunch,12.50,Food"));
    }

    #[test]
    fn test_bad_import_leaves_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, r#"[{"description":"Rent"}]"#).unwrap();

        let mut ledger = seeded();
        let err = handle_data_command(&mut ledger, DataCommands::Import { file: path }).unwrap_err();
        assert!(err.is_malformed_import());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_missing_import_file() {
        let mut ledger = seeded();
        let err = handle_data_command(
            &mut ledger,
            DataCommands::Import {
                file: PathBuf::from("/nonexistent/backup.json"),
            },
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::Io(_)));
    }
}
