//! Dashboard summary
//!
//! Headline figures for the whole ledger plus the budget-cap status.

use chrono::{Duration, NaiveDate};

use crate::config::Settings;
use crate::models::currency::format_base;
use crate::models::{Money, Transaction};

use super::category_totals::CategoryTotals;

/// Trailing window, in days, for the recent-spending figure
pub const RECENT_DAYS: i64 = 7;

/// Percentage of the cap at which the budget is flagged
pub const WARNING_PERCENT: f64 = 80.0;

/// Where total spending stands against the budget cap
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    /// No cap configured
    NoCap,
    WithinBudget { remaining: Money },
    /// At or above the warning threshold but under the cap
    Warning { remaining: Money },
    /// At or over the cap
    Exceeded { over: Money },
}

impl BudgetStatus {
    /// Compare a base-currency total against a base-currency cap
    pub fn evaluate(total: Money, budget_cap: f64) -> Self {
        if budget_cap <= 0.0 || !budget_cap.is_finite() {
            return Self::NoCap;
        }

        let cap = Money::from_major(budget_cap);
        let percent = total.as_f64() / budget_cap * 100.0;

        if percent >= 100.0 {
            Self::Exceeded { over: total - cap }
        } else if percent >= WARNING_PERCENT {
            Self::Warning {
                remaining: cap - total,
            }
        } else {
            Self::WithinBudget {
                remaining: cap - total,
            }
        }
    }

    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }

    /// One-line description in the display currency
    pub fn describe(&self, settings: &Settings) -> String {
        let fmt = |m: Money| format_base(m, settings.currency, &settings.rates);
        match self {
            Self::NoCap => "No budget cap set".to_string(),
            Self::WithinBudget { remaining } => format!("{} remaining", fmt(*remaining)),
            Self::Warning { remaining } => {
                format!("Warning: approaching budget cap ({} remaining)", fmt(*remaining))
            }
            Self::Exceeded { over } => format!("Budget exceeded by {}", fmt(*over)),
        }
    }
}

/// Headline statistics for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub count: usize,
    pub total: Money,
    /// Category with the largest total, if any records exist
    pub top_category: Option<String>,
    /// Total of records dated within the last seven days of `today`
    pub recent_total: Money,
}

impl DashboardSummary {
    pub fn generate(records: &[Transaction], today: NaiveDate) -> Self {
        let since = today - Duration::days(RECENT_DAYS);

        let total = records.iter().map(|t| t.amount).sum();
        let recent_total = records
            .iter()
            .filter(|t| t.naive_date().is_some_and(|d| d >= since))
            .map(|t| t.amount)
            .sum();
        let top_category = CategoryTotals::generate(records)
            .top_category()
            .map(str::to_string);

        Self {
            count: records.len(),
            total,
            top_category,
            recent_total,
        }
    }

    pub fn budget_status(&self, settings: &Settings) -> BudgetStatus {
        BudgetStatus::evaluate(self.total, settings.budget_cap)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let fmt = |m: Money| format_base(m, settings.currency, &settings.rates);
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&"=".repeat(44));
        output.push('\n');
        output.push_str(&format!("{:<20} {}\n", "Transactions:", self.count));
        output.push_str(&format!("{:<20} {}\n", "Total spent:", fmt(self.total)));
        output.push_str(&format!(
            "{:<20} {}\n",
            "Top category:",
            self.top_category.as_deref().unwrap_or("-")
        ));
        output.push_str(&format!("{:<20} {}\n", "Last 7 days:", fmt(self.recent_total)));

        if settings.has_budget_cap() {
            output.push_str(&format!(
                "{:<20} {}\n",
                "Budget cap:",
                fmt(Money::from_major(settings.budget_cap))
            ));
        }
        output.push_str(&format!(
            "{:<20} {}\n",
            "Budget:",
            self.budget_status(settings).describe(settings)
        ));

        output
    }
}
