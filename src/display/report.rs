//! Report formatting utilities for terminal output

use crate::config::Settings;
use crate::reports::{CategoryTotals, DashboardSummary, MonthlyTrend};

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Format the full dashboard: summary, category breakdown and trend
pub fn format_dashboard(
    summary: &DashboardSummary,
    categories: &CategoryTotals,
    trend: &MonthlyTrend,
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&summary.format_terminal(settings));
    output.push('\n');
    output.push_str(&categories.format_terminal(settings));
    output.push('\n');
    output.push_str(&trend.format_terminal(settings));
    output.push_str(&double_separator(44));
    output.push('\n');

    output
}
