//! Category presets
//!
//! The ledger accepts any category matching the category rule; these six are
//! the choices offered when entering a transaction.

pub const PRESET_CATEGORIES: [&str; 6] =
    ["Food", "Books", "Transport", "Entertainment", "Fees", "Other"];

/// Category used when none is given
pub const DEFAULT_CATEGORY: &str = "Other";

/// Check whether a category is one of the presets (case-sensitive)
pub fn is_preset(category: &str) -> bool {
    PRESET_CATEGORIES.contains(&category)
}
