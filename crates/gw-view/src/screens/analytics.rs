use gw_core::RecordStore;
use serde::Serialize;

use crate::aggregate::{
    BudgetRow, StatusSlice, budget_rows, revenue_peak, revenue_total, status_breakdown,
};
use crate::format::format_currency;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueBar {
    pub month: String,
    pub revenue: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub revenue: Vec<RevenueBar>,
    pub revenue_total: i64,
    pub revenue_total_display: String,
    pub peak_month: Option<String>,
    pub status_breakdown: Vec<StatusSlice>,
    pub budget_rows: Vec<BudgetRow>,
}

/// Company analytics: monthly revenue, projects by status, budget performance.
#[must_use]
pub fn build(store: &RecordStore) -> Analytics {
    let total = revenue_total(&store.monthly_revenue);
    Analytics {
        revenue: store
            .monthly_revenue
            .iter()
            .map(|month| RevenueBar {
                month: month.month.clone(),
                revenue: month.revenue,
                label: format_currency(month.revenue),
            })
            .collect(),
        revenue_total: total,
        revenue_total_display: format_currency(total),
        peak_month: revenue_peak(&store.monthly_revenue).map(|month| month.month.clone()),
        status_breakdown: status_breakdown(&store.projects),
        budget_rows: budget_rows(&store.projects),
    }
}
