//! Core data models for the ledger
//!
//! Transactions, money, ids, categories and display currencies.

pub mod category;
pub mod currency;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{DEFAULT_CATEGORY, PRESET_CATEGORIES};
pub use currency::{Currency, Rates};
pub use ids::TransactionId;
pub use money::Money;
pub use transaction::{
    Transaction, TransactionDraft, TransactionInput, TransactionPatch, TransactionPatchInput,
};
