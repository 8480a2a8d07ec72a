//! Dashboard CLI command

use chrono::NaiveDate;

use crate::display::format_dashboard;
use crate::error::LedgerResult;
use crate::reports::{category_totals, monthly_trend, DashboardSummary};
use crate::services::Ledger;
use crate::storage::Persistence;

/// Print the dashboard for the ledger as of `today`
pub fn handle_dashboard_command<P: Persistence>(
    ledger: &Ledger<P>,
    today: NaiveDate,
) -> LedgerResult<()> {
    let records = ledger.snapshot();
    let summary = DashboardSummary::generate(records, today);

    print!(
        "{}",
        format_dashboard(
            &summary,
            &category_totals(records),
            &monthly_trend(records),
            ledger.settings()
        )
    );

    if summary.budget_status(ledger.settings()).is_exceeded() {
        tracing::debug!(total = %summary.total, cap = ledger.settings().budget_cap, "Budget cap exceeded");
    }
    Ok(())
}
