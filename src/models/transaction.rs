//! Transaction model
//!
//! A ledger entry plus the draft and patch shapes used to create and edit it.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, never reassigned
    pub id: TransactionId,

    pub description: String,

    /// Amount in the base currency
    pub amount: Money,

    pub category: String,

    /// Transaction date as `YYYY-MM-DD`
    pub date: String,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction from a draft with a fresh id and timestamps
    pub fn new(draft: TransactionDraft) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::generate(),
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the fields present in `patch` and re-stamp `updated_at`
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        self.touch();
    }

    /// Re-stamp `updated_at`, always moving it forward
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }

    /// Parse the date as a calendar date; `None` for impossible dates such
    /// as `2024-02-31`, which the date rule lets through
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Year and month from the `YYYY-MM` prefix of the date
    pub fn year_month(&self) -> Option<(i32, u32)> {
        let year = self.date.get(0..4)?.parse().ok()?;
        if self.date.get(4..5)? != "-" {
            return None;
        }
        let month: u32 = self.date.get(5..7)?.parse().ok()?;
        (1..=12).contains(&month).then_some((year, month))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}]",
            self.date, self.description, self.amount, self.category
        )
    }
}

/// A validated, not-yet-stored transaction
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub date: String,
}

/// Field changes for an existing transaction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }
}

/// Raw text entered for a new transaction, before validation
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

/// Raw text entered for an edit, before validation
#[derive(Debug, Clone, Default)]
pub struct TransactionPatchInput {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TransactionDraft {
        TransactionDraft {
            description: "Groceries".into(),
            amount: Money::from_cents(4250),
            category: "Food".into(),
            date: "2024-03-09".into(),
        }
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(draft());
        assert_eq!(txn.description, "Groceries");
        assert_eq!(txn.created_at, txn.updated_at);
        assert!(txn.id.as_str().starts_with("txn_"));
    }

    #[test]
    fn test_apply_patch_keeps_other_fields() {
        let mut txn = Transaction::new(draft());
        let before = txn.clone();

        txn.apply(TransactionPatch {
            amount: Some(Money::from_cents(100)),
            ..Default::default()
        });

        assert_eq!(txn.amount, Money::from_cents(100));
        assert_eq!(txn.description, before.description);
        assert_eq!(txn.category, before.category);
        assert_eq!(txn.date, before.date);
        assert_eq!(txn.created_at, before.created_at);
        assert!(txn.updated_at > before.updated_at);
    }

    #[test]
    fn test_touch_is_strictly_increasing() {
        let mut txn = Transaction::new(draft());
        txn.updated_at = Utc::now() + Duration::hours(1);
        let prior = txn.updated_at;
        txn.touch();
        assert!(txn.updated_at > prior);
    }

    #[test]
    fn test_year_month() {
        let mut txn = Transaction::new(draft());
        assert_eq!(txn.year_month(), Some((2024, 3)));

        txn.date = "2024-02-31".into();
        assert_eq!(txn.year_month(), Some((2024, 2)));
        assert!(txn.naive_date().is_none());

        txn.date = "March".into();
        assert_eq!(txn.year_month(), None);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let txn = Transaction::new(draft());
        let value = serde_json::to_value(&txn).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["amount"], serde_json::json!(42.5));
    }
}
