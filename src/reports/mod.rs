//! Spending analytics
//!
//! Pure aggregations over a snapshot of the ledger: per-category totals,
//! a monthly trend, and the dashboard summary with budget status.

pub mod category_totals;
pub mod dashboard;
pub mod trend;

pub use category_totals::{CategoryTotals, PALETTE};
pub use dashboard::{BudgetStatus, DashboardSummary};
pub use trend::{MonthlyTrend, TREND_MONTHS};

use crate::models::Transaction;

/// Totals per category, in first-seen order
pub fn category_totals(records: &[Transaction]) -> CategoryTotals {
    CategoryTotals::generate(records)
}

/// Totals per month for the most recent months with data
pub fn monthly_trend(records: &[Transaction]) -> MonthlyTrend {
    MonthlyTrend::generate(records)
}
