//! Monthly trend
//!
//! Sums amounts per calendar month of the transaction date and keeps the
//! most recent six months that have data.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::config::Settings;
use crate::models::currency::format_base;
use crate::models::{Money, Transaction};

/// Number of months shown in the trend
pub const TREND_MONTHS: usize = 6;

/// Totals per month, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyTrend {
    /// Year and month of each entry
    pub months: Vec<(i32, u32)>,
    /// Labels such as `Jan 24`
    pub labels: Vec<String>,
    /// Total per month, in the base currency
    pub totals: Vec<Money>,
}

impl MonthlyTrend {
    pub fn generate(records: &[Transaction]) -> Self {
        let mut by_month: BTreeMap<(i32, u32), Money> = BTreeMap::new();

        for txn in records {
            match txn.year_month() {
                Some(key) => *by_month.entry(key).or_default() += txn.amount,
                None => tracing::debug!(id = %txn.id, date = %txn.date, "Skipping undated transaction"),
            }
        }

        let skip = by_month.len().saturating_sub(TREND_MONTHS);
        let recent: Vec<_> = by_month.into_iter().skip(skip).collect();

        Self {
            months: recent.iter().map(|(key, _)| *key).collect(),
            labels: recent.iter().map(|((y, m), _)| month_label(*y, *m)).collect(),
            totals: recent.iter().map(|(_, total)| *total).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Format the trend for terminal display with a proportional bar per month
    pub fn format_terminal(&self, settings: &Settings) -> String {
        const BAR_WIDTH: f64 = 30.0;

        let mut output = String::new();
        output.push_str("Monthly Trend\n");
        output.push_str(&"-".repeat(44));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No transactions yet.\n");
            return output;
        }

        let max = self.totals.iter().max().copied().unwrap_or_default();
        for (label, total) in self.labels.iter().zip(&self.totals) {
            let width = if max.is_zero() {
                0
            } else {
                (total.cents() as f64 / max.cents() as f64 * BAR_WIDTH).round() as usize
            };
            output.push_str(&format!(
                "{:<7} {:>15} {}\n",
                label,
                format_base(*total, settings.currency, &settings.rates),
                "#".repeat(width)
            ));
        }

        output
    }
}

/// Abbreviated month and two-digit year, e.g. `Mar 24`
fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %y").to_string())
        .unwrap_or_else(|| format!("{:04}-{:02}", year, month))
}
