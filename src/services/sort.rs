//! Sort engine
//!
//! Orders transactions by a chosen field and direction. Amounts compare
//! numerically, every other field by its text; ISO dates therefore sort
//! chronologically. The sort is stable, so equal keys keep their prior order.

use clap::ValueEnum;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::Transaction;

/// Field a ledger listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortField {
    #[default]
    Date,
    Description,
    Amount,
    Category,
}

impl SortField {
    fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            Self::Date => a.date.cmp(&b.date),
            Self::Description => a.description.cmp(&b.description),
            Self::Amount => a.amount.cmp(&b.amount),
            Self::Category => a.category.cmp(&b.category),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Description => write!(f, "description"),
            Self::Amount => write!(f, "amount"),
            Self::Category => write!(f, "category"),
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "description" => Ok(Self::Description),
            "amount" => Ok(Self::Amount),
            "category" => Ok(Self::Category),
            other => Err(format!("Unknown sort field: {}", other)),
        }
    }
}

/// Current ordering of a listing; transient, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub ascending: bool,
}

impl Default for SortState {
    /// Newest dates first
    fn default() -> Self {
        Self {
            field: SortField::Date,
            ascending: false,
        }
    }
}

impl SortState {
    pub fn new(field: SortField, ascending: bool) -> Self {
        Self { field, ascending }
    }

    /// Select a column: the current field flips direction, a new field
    /// starts ascending
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field;
            self.ascending = true;
        }
    }

    pub fn apply(&self, records: &mut [Transaction]) {
        sort_records(records, self.field, self.ascending);
    }
}

/// Sort records in place
pub fn sort_records(records: &mut [Transaction], field: SortField, ascending: bool) {
    records.sort_by(|a, b| {
        let ordering = field.compare(a, b);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

/// Sort a copy of a snapshot
pub fn sorted(records: &[Transaction], field: SortField, ascending: bool) -> Vec<Transaction> {
    let mut copy = records.to_vec();
    sort_records(&mut copy, field, ascending);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionDraft};

    fn txn(description: &str, cents: i64, category: &str, date: &str) -> Transaction {
        Transaction::new(TransactionDraft {
            description: description.into(),
            amount: Money::from_cents(cents),
            category: category.into(),
            date: date.into(),
        })
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn("Rent", 90000, "Fees", "2024-03-01"),
            txn("Bus", 250, "Transport", "2024-01-15"),
            txn("Novel", 1299, "Books", "2024-02-10"),
            txn("Apples", 250, "Food", "2024-02-11"),
        ]
    }

    fn amounts(records: &[Transaction]) -> Vec<i64> {
        records.iter().map(|t| t.amount.cents()).collect()
    }

    #[test]
    fn test_amount_sorts_numerically() {
        let mut records = vec![
            txn("a", 900, "Food", "2024-01-01"),
            txn("b", 10000, "Food", "2024-01-01"),
            txn("c", 1000, "Food", "2024-01-01"),
        ];
        sort_records(&mut records, SortField::Amount, true);
        assert_eq!(amounts(&records), vec![900, 1000, 10000]);
    }

    #[test]
    fn test_descending_reverses_amount_order() {
        let asc = sorted(&sample(), SortField::Amount, true);
        let desc = sorted(&asc, SortField::Amount, false);

        let mut expected = amounts(&asc);
        expected.reverse();
        assert_eq!(amounts(&desc), expected);
        assert_eq!(desc.len(), asc.len());
    }

    #[test]
    fn test_date_sorts_chronologically() {
        let records = sorted(&sample(), SortField::Date, true);
        let dates: Vec<_> = records.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-15", "2024-02-10", "2024-02-11", "2024-03-01"]);
    }

    #[test]
    fn test_text_fields() {
        let records = sorted(&sample(), SortField::Category, false);
        assert_eq!(records[0].category, "Transport");

        let records = sorted(&sample(), SortField::Description, true);
        assert_eq!(records[0].description, "Apples");
    }

    #[test]
    fn test_ties_keep_prior_order() {
        let records = sorted(&sample(), SortField::Amount, true);
        assert_eq!(records[0].description, "Bus");
        assert_eq!(records[1].description, "Apples");
    }

    #[test]
    fn test_sort_state_select() {
        let mut state = SortState::default();
        assert_eq!(state.field, SortField::Date);
        assert!(!state.ascending);

        state.select(SortField::Date);
        assert!(state.ascending);

        state.select(SortField::Amount);
        assert_eq!(state.field, SortField::Amount);
        assert!(state.ascending);

        state.select(SortField::Amount);
        assert!(!state.ascending);
    }

    #[test]
    fn test_parse_field() {
        assert_eq!("Amount".parse::<SortField>().unwrap(), SortField::Amount);
        assert!("payee".parse::<SortField>().is_err());
    }
}
