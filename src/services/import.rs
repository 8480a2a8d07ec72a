//! JSON import
//!
//! Parses a ledger backup: a JSON array of transaction objects. Every element
//! needs a description, amount, category and date; missing ids and
//! timestamps are backfilled. Any structural problem rejects the whole
//! import so the ledger is never partially replaced.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionId};

const REQUIRED_FIELDS: [&str; 4] = ["description", "amount", "category", "date"];

/// One element of an import file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportRecord {
    #[serde(default)]
    id: Option<String>,
    description: String,
    amount: Money,
    category: String,
    date: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

/// Parse import text into complete transactions
pub fn parse_import(text: &str) -> LedgerResult<Vec<Transaction>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| LedgerError::MalformedImport(format!("Invalid JSON: {}", e)))?;

    let Value::Array(items) = value else {
        return Err(LedgerError::MalformedImport(
            "Invalid format: expected an array".into(),
        ));
    };

    for (index, item) in items.iter().enumerate() {
        check_required_fields(index, item)?;
    }

    let now = Utc::now();
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let record: ImportRecord = serde_json::from_value(item).map_err(|e| {
            LedgerError::MalformedImport(format!(
                "Invalid transaction structure at index {}: {}",
                index, e
            ))
        })?;

        let id = match record.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => TransactionId::from_string(id),
            None => TransactionId::generate(),
        };

        if !seen.insert(id.clone()) {
            return Err(LedgerError::MalformedImport(format!(
                "Duplicate transaction id at index {}: {}",
                index, id
            )));
        }

        records.push(Transaction {
            id,
            description: record.description,
            amount: record.amount,
            category: record.category,
            date: record.date,
            created_at: record.created_at.unwrap_or(now),
            updated_at: record.updated_at.unwrap_or(now),
        });
    }

    Ok(records)
}

fn check_required_fields(index: usize, item: &Value) -> LedgerResult<()> {
    let Value::Object(fields) = item else {
        return Err(LedgerError::MalformedImport(format!(
            "Invalid transaction structure at index {}: expected an object",
            index
        )));
    };

    for name in REQUIRED_FIELDS {
        let present = match fields.get(name) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        };
        if !present {
            return Err(LedgerError::MalformedImport(format!(
                "Invalid transaction structure at index {}: missing {}",
                index, name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_backfills_ids_and_timestamps() {
        let records = parse_import(
            r#"[{"description":"Rent","amount":500,"category":"Fees","date":"2024-03-01"}]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        let rent = &records[0];
        assert!(rent.id.as_str().starts_with("txn_"));
        assert_eq!(rent.amount, Money::from_cents(50000));
        assert_eq!(rent.created_at, rent.updated_at);
    }

    #[test]
    fn test_import_keeps_existing_ids_and_timestamps() {
        let records = parse_import(
            r#"[{"id":"legacy-1","description":"Tea","amount":"3.5","category":"Food",
                 "date":"2024-01-02","createdAt":"2024-01-02T10:00:00Z",
                 "updatedAt":"2024-01-03T10:00:00Z","note":"ignored"}]"#,
        )
        .unwrap();

        let tea = &records[0];
        assert_eq!(tea.id.as_str(), "legacy-1");
        assert_eq!(tea.amount, Money::from_cents(350));
        assert_eq!(tea.created_at.to_rfc3339(), "2024-01-02T10:00:00+00:00");
        assert!(tea.updated_at > tea.created_at);
    }

    #[test]
    fn test_missing_fields_reject_whole_import() {
        let err = parse_import(
            r#"[{"description":"Tea","amount":3,"category":"Food","date":"2024-01-02"},
                {"description":"Rent"}]"#,
        )
        .unwrap_err();

        assert!(err.is_malformed_import());
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_not_an_array() {
        let err = parse_import(r#"{"description":"Rent"}"#).unwrap_err();
        assert!(err.to_string().contains("expected an array"));

        assert!(parse_import("not json").unwrap_err().is_malformed_import());
    }

    #[test]
    fn test_empty_and_null_fields_count_as_missing() {
        assert!(parse_import(
            r#"[{"description":"","amount":3,"category":"Food","date":"2024-01-02"}]"#
        )
        .is_err());
        assert!(parse_import(
            r#"[{"description":"Tea","amount":null,"category":"Food","date":"2024-01-02"}]"#
        )
        .is_err());
    }

    #[test]
    fn test_wrong_types_rejected() {
        let err = parse_import(
            r#"[{"description":"Tea","amount":"lots","category":"Food","date":"2024-01-02"}]"#,
        )
        .unwrap_err();
        assert!(err.is_malformed_import());

        assert!(parse_import(
            r#"[{"description":42,"amount":1,"category":"Food","date":"2024-01-02"}]"#
        )
        .is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = parse_import(
            r#"[{"id":"a","description":"Tea","amount":3,"category":"Food","date":"2024-01-02"},
                {"id":"a","description":"Bun","amount":2,"category":"Food","date":"2024-01-02"}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }

    #[test]
    fn test_import_bypasses_field_rules() {
        let records = parse_import(
            r#"[{"description":" coffee coffee","amount":1,"category":"Food & Drink","date":"2024-02-31"}]"#,
        )
        .unwrap();
        assert_eq!(records[0].category, "Food & Drink");
    }

    #[test]
    fn test_out_of_range_and_negative_amounts_rejected() {
        for amount in ["1e17", "1e300", "-5", "\"-5\"", "\"99999999999999999\""] {
            let text = format!(
                r#"[{{"description":"Car","amount":{},"category":"Transport","date":"2024-01-05"}}]"#,
                amount
            );
            let err = parse_import(&text).unwrap_err();
            assert!(err.is_malformed_import(), "amount {} accepted", amount);
            assert!(err.to_string().contains("index 0"));
        }
    }

    #[test]
    fn test_largest_amounts_aggregate() {
        let records = parse_import(
            r#"[{"description":"House","amount":1000000000000,"category":"Home","date":"2024-01-05"},
                {"description":"Boat","amount":1000000000000,"category":"Home","date":"2024-01-06"}]"#,
        )
        .unwrap();
        assert_eq!(records[0].amount, Money::MAX);

        let totals = crate::reports::CategoryTotals::generate(&records);
        assert_eq!(totals.grand_total(), Money::from_cents(2 * Money::MAX.cents()));
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_import("[]").unwrap().is_empty());
    }
}
