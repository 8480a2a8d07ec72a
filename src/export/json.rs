//! JSON export
//!
//! Serializes the collection exactly as it is stored, so the output is a
//! valid import file.

use std::io::Write;

use crate::error::LedgerResult;
use crate::models::Transaction;

/// Write all transactions as a JSON array
pub fn export_json<W: Write>(records: &[Transaction], writer: &mut W, pretty: bool) -> LedgerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, records)?;
    } else {
        serde_json::to_writer(&mut *writer, records)?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionDraft};
    use crate::services::parse_import;

    #[test]
    fn test_export_is_importable() {
        let records = vec![
            Transaction::new(TransactionDraft {
                description: "Rent".into(),
                amount: Money::from_cents(50000),
                category: "Fees".into(),
                date: "2024-03-01".into(),
            }),
            Transaction::new(TransactionDraft {
                description: "Snack".into(),
                amount: Money::from_cents(1250),
                category: "Food".into(),
                date: "2024-03-02".into(),
            }),
        ];

        let mut buffer = Vec::new();
        export_json(&records, &mut buffer, true).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("\"amount\": 500"));
        assert!(text.contains("\"amount\": 12.5"));
        assert!(text.contains("\"createdAt\""));
        assert_eq!(parse_import(&text).unwrap(), records);
    }

    #[test]
    fn test_compact_export() {
        let mut buffer = Vec::new();
        export_json(&[], &mut buffer, false).unwrap();
        assert_eq!(buffer, b"[]\n");
    }
}
