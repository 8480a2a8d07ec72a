//! Transaction display formatting
//!
//! Register table and detail view. Amounts are shown in the display
//! currency; search matches are bracketed in the text columns.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::currency::format_base;
use crate::models::Transaction;
use crate::services::search::highlight_with;
use crate::services::SearchMatcher;

/// Markers placed around search matches in terminal output
pub const MATCH_OPEN: &str = "[";
pub const MATCH_CLOSE: &str = "]";

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl RegisterRow {
    fn new(txn: &Transaction, settings: &Settings, matcher: Option<&SearchMatcher>) -> Self {
        let mark = |text: &str| highlight_with(text, matcher, MATCH_OPEN, MATCH_CLOSE).into_owned();
        Self {
            id: txn.id.to_string(),
            date: txn.date.clone(),
            description: mark(truncate(&txn.description, DESCRIPTION_WIDTH).as_str()),
            category: mark(txn.category.as_str()),
            amount: format_base(txn.amount, settings.currency, &settings.rates),
        }
    }
}

/// Format transactions as a register table
pub fn format_transaction_register(
    transactions: &[&Transaction],
    settings: &Settings,
    matcher: Option<&SearchMatcher>,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<_> = transactions
        .iter()
        .map(|txn| RegisterRow::new(txn, settings, matcher))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_base(txn.amount, settings.currency, &settings.rates)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!(
        "Created:     {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M:%S")
    ));
    output.push_str(&format!(
        "Updated:     {}\n",
        txn.updated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    output
}

/// Shorten text to at most `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
