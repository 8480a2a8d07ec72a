//! Transaction identifiers
//!
//! Ids are opaque strings built from a coarse timestamp and a random suffix,
//! e.g. `txn_1718000000000_k3v9q2x7a`. Imported ledgers may carry ids in any
//! other format, so parsing never rejects a non-empty string.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const ID_PREFIX: &str = "txn_";
const SUFFIX_LEN: usize = 9;

/// Unique identifier of a ledger transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a fresh id from the current time and a random suffix
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let random = Uuid::new_v4().simple().to_string();
        Self(format!("{}{}_{}", ID_PREFIX, millis, &random[..SUFFIX_LEN]))
    }

    /// Wrap an existing id string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl FromStr for TransactionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("transaction id cannot be empty".to_string());
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_format() {
        let id = TransactionId::generate();
        let rest = id.as_str().strip_prefix("txn_").unwrap();
        let (millis, suffix) = rest.split_once('_').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 9);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<_> = (0..1000).map(|_| TransactionId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_serialization() {
        let id = TransactionId::from("txn_1_abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"txn_1_abc\"");
        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("  legacy-7 ".parse::<TransactionId>().unwrap().as_str(), "legacy-7");
        assert!("".parse::<TransactionId>().is_err());
    }
}
