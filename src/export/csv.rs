//! CSV export
//!
//! One row per transaction. Amounts are converted from the base currency to
//! the display currency and written with that currency's decimal places and
//! no symbol.

use std::io::Write;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::currency::convert;
use crate::models::{Currency, Transaction};

pub const CSV_HEADER: [&str; 4] = ["Date", "Description", "Amount", "Category"];

/// Write all transactions as CSV
pub fn export_transactions_csv<W: Write>(
    records: &[Transaction],
    settings: &Settings,
    writer: W,
) -> LedgerResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for txn in records {
        let amount = display_amount(txn, settings);
        csv_writer.write_record([
            txn.date.as_str(),
            txn.description.as_str(),
            amount.as_str(),
            txn.category.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn display_amount(txn: &Transaction, settings: &Settings) -> String {
    let currency = settings.currency;
    let value = convert(txn.amount.as_f64(), Currency::Usd, currency, &settings.rates);
    format!("{:.*}", currency.decimals(), value)
}
