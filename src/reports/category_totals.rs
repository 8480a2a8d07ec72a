//! Category breakdown
//!
//! Sums base-currency amounts per category, keeping categories in the order
//! they are first seen and giving each a chart colour from a fixed palette.

use crate::config::Settings;
use crate::models::currency::format_base;
use crate::models::{Money, Transaction};

/// Chart colours, cycled by category index
pub const PALETTE: [&str; 10] = [
    "#2563eb", "#dc2626", "#16a34a", "#ea580c", "#9333ea", "#0891b2", "#ca8a04", "#db2777",
    "#65a30d", "#7c2d12",
];

/// Totals per category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    /// Distinct categories in first-seen order
    pub labels: Vec<String>,
    /// Total per label, in the base currency
    pub totals: Vec<Money>,
    /// Colour per label
    pub colors: Vec<&'static str>,
}

impl CategoryTotals {
    pub fn generate(records: &[Transaction]) -> Self {
        let mut labels: Vec<String> = Vec::new();
        let mut totals: Vec<Money> = Vec::new();

        for txn in records {
            match labels.iter().position(|label| label == &txn.category) {
                Some(index) => totals[index] += txn.amount,
                None => {
                    labels.push(txn.category.clone());
                    totals.push(txn.amount);
                }
            }
        }

        let colors = (0..labels.len()).map(|i| PALETTE[i % PALETTE.len()]).collect();

        Self {
            labels,
            totals,
            colors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum over all categories
    pub fn grand_total(&self) -> Money {
        self.totals.iter().sum()
    }

    /// Category with the largest total; the earliest seen wins ties
    pub fn top_category(&self) -> Option<&str> {
        let mut best: Option<(usize, Money)> = None;
        for (index, total) in self.totals.iter().enumerate() {
            if best.map_or(true, |(_, max)| *total > max) {
                best = Some((index, *total));
            }
        }
        best.map(|(index, _)| self.labels[index].as_str())
    }

    /// Share of the grand total per category, in percent
    pub fn percentages(&self) -> Vec<f64> {
        let grand = self.grand_total();
        self.totals
            .iter()
            .map(|t| {
                if grand.is_zero() {
                    0.0
                } else {
                    t.cents() as f64 / grand.cents() as f64 * 100.0
                }
            })
            .collect()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"-".repeat(44));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No transactions yet.\n");
            return output;
        }

        for ((label, total), percent) in self
            .labels
            .iter()
            .zip(&self.totals)
            .zip(self.percentages())
        {
            output.push_str(&format!(
                "{:<20} {:>15} {:>6.1}%\n",
                label,
                format_base(*total, settings.currency, &settings.rates),
                percent
            ));
        }

        output
    }
}
