//! Budget roll-ups, variance, and status tallies.
//!
//! Every ratio goes through [`percent_of`], which returns 0 for a zero
//! denominator. No NaN leaves this module.

use gw_core::entities::{BudgetCategory, ChangeOrder, MonthlyRevenue, Project};
use gw_core::enums::{BudgetStatus, ChangeOrderStatus};
use indexmap::IndexMap;
use serde::Serialize;

use crate::format::{clamp_percent, format_currency, format_signed_currency};
use crate::label::{StatusLabel, Tone};

// ---------------------------------------------------------------------------
// Breakdown totals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BudgetTotals {
    pub estimated: i64,
    pub actual: i64,
    /// `estimated - actual`; negative when the breakdown is over budget.
    pub remaining: i64,
}

#[must_use]
pub fn budget_totals(categories: &[BudgetCategory]) -> BudgetTotals {
    let (estimated, actual) = categories.iter().fold((0_i64, 0_i64), |(est, act), category| {
        (est + category.estimated, act + category.actual)
    });
    BudgetTotals {
        estimated,
        actual,
        remaining: estimated - actual,
    }
}

/// Breakdown-level variance percentage: `(estimated - actual) / estimated`.
#[must_use]
pub fn breakdown_variance_pct(categories: &[BudgetCategory]) -> f64 {
    let totals = budget_totals(categories);
    percent_of(totals.remaining, totals.estimated)
}

// ---------------------------------------------------------------------------
// Project variance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetVariance {
    /// `budget - spent`; positive means under budget.
    pub variance: i64,
    pub variance_pct: f64,
}

impl BudgetVariance {
    #[must_use]
    pub const fn is_over_budget(&self) -> bool {
        self.variance < 0
    }

    #[must_use]
    pub const fn tone(&self) -> Tone {
        if self.is_over_budget() {
            Tone::Danger
        } else {
            Tone::Success
        }
    }

    /// `+$63K` / `-$500`.
    #[must_use]
    pub fn amount_display(&self) -> String {
        format_signed_currency(self.variance)
    }

    /// `+15.0%` when under budget. Over budget carries only the number's own
    /// sign, so a guarded zero renders as `0.0%`.
    ///
    /// A zero budget with spending is the one case where this and
    /// [`Self::amount_display`] disagree on sign: `-$3K` next to `0.0%`.
    #[must_use]
    pub fn pct_display(&self) -> String {
        if self.is_over_budget() {
            format!("{:.1}%", self.variance_pct)
        } else {
            format!("+{:.1}%", self.variance_pct)
        }
    }
}

#[must_use]
pub fn budget_variance(budget: i64, spent: i64) -> BudgetVariance {
    let variance = budget - spent;
    BudgetVariance {
        variance,
        variance_pct: percent_of(variance, budget),
    }
}

// ---------------------------------------------------------------------------
// Category progress
// ---------------------------------------------------------------------------

/// `actual / estimated * 100`; may exceed 100 for over-budget categories.
#[must_use]
pub fn category_ratio(category: &BudgetCategory) -> f64 {
    percent_of(category.actual, category.estimated)
}

/// Progress-bar width, clamped to `[0, 100]`.
#[must_use]
pub fn category_bar_width(category: &BudgetCategory) -> f64 {
    clamp_percent(category_ratio(category))
}

#[must_use]
pub const fn is_over_budget(category: &BudgetCategory) -> bool {
    category.actual > category.estimated
}

/// Over budget wins over the stored status label.
#[must_use]
pub const fn category_tone(category: &BudgetCategory) -> Tone {
    if is_over_budget(category) {
        Tone::Danger
    } else if matches!(category.status, BudgetStatus::Complete) {
        Tone::Success
    } else {
        Tone::Accent
    }
}

// ---------------------------------------------------------------------------
// Status tallies
// ---------------------------------------------------------------------------

/// Count of projects per lowercase status key, in first-seen order.
#[must_use]
pub fn status_counts(projects: &[Project]) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for project in projects {
        *counts.entry(project.status.as_str().to_lowercase()).or_insert(0) += 1;
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSlice {
    pub status: String,
    pub label: String,
    pub count: usize,
    pub tone: Tone,
}

/// One pie slice per distinct status.
#[must_use]
pub fn status_breakdown(projects: &[Project]) -> Vec<StatusSlice> {
    status_counts(projects)
        .into_iter()
        .map(|(status, count)| {
            let label = StatusLabel::parse(&status);
            StatusSlice {
                label: label.label().to_string(),
                tone: label.tone(),
                status,
                count,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Analytics rows
// ---------------------------------------------------------------------------

/// One line of the budget performance table, amounts in compact style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRow {
    pub project_id: String,
    pub name: String,
    pub budget: i64,
    pub spent: i64,
    pub variance: i64,
    pub variance_pct: f64,
    pub budget_display: String,
    pub spent_display: String,
    pub variance_display: String,
    pub variance_pct_display: String,
    pub tone: Tone,
}

#[must_use]
pub fn budget_rows(projects: &[Project]) -> Vec<BudgetRow> {
    projects
        .iter()
        .map(|project| {
            let variance = budget_variance(project.budget, project.spent);
            BudgetRow {
                project_id: project.id.clone(),
                name: project.name.clone(),
                budget: project.budget,
                spent: project.spent,
                variance: variance.variance,
                variance_pct: variance.variance_pct,
                budget_display: format_currency(project.budget),
                spent_display: format_currency(project.spent),
                variance_display: variance.amount_display(),
                variance_pct_display: variance.pct_display(),
                tone: variance.tone(),
            }
        })
        .collect()
}

#[must_use]
pub fn revenue_total(months: &[MonthlyRevenue]) -> i64 {
    months.iter().map(|month| month.revenue).sum()
}

/// Highest-revenue month; the earliest wins a tie.
#[must_use]
pub fn revenue_peak(months: &[MonthlyRevenue]) -> Option<&MonthlyRevenue> {
    months.iter().fold(None, |best, month| match best {
        Some(current) if current.revenue >= month.revenue => Some(current),
        _ => Some(month),
    })
}

// ---------------------------------------------------------------------------
// Change orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChangeOrderSummary {
    pub total: usize,
    pub pending: usize,
    pub approved_amount: i64,
    pub pending_amount: i64,
}

#[must_use]
pub fn change_order_summary<'a, I>(change_orders: I) -> ChangeOrderSummary
where
    I: IntoIterator<Item = &'a ChangeOrder>,
{
    change_orders
        .into_iter()
        .fold(ChangeOrderSummary::default(), |mut summary, change_order| {
            summary.total += 1;
            match change_order.status {
                ChangeOrderStatus::Pending => {
                    summary.pending += 1;
                    summary.pending_amount += change_order.amount;
                }
                ChangeOrderStatus::Approved => summary.approved_amount += change_order.amount,
                ChangeOrderStatus::Rejected => {}
            }
            summary
        })
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

/// Side-by-side comparison of a project's own budget figures and its
/// category breakdown. Neither source is adjusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetReconciliation {
    pub project_id: String,
    pub budget: i64,
    pub estimated_total: i64,
    /// `budget - estimated_total`.
    pub budget_gap: i64,
    pub spent: i64,
    pub actual_total: i64,
    /// `spent - actual_total`.
    pub spent_gap: i64,
}

impl BudgetReconciliation {
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.budget_gap == 0 && self.spent_gap == 0
    }
}

/// Compare project-level figures against the breakdown.
///
/// Returns `None` when the project has no breakdown to compare against.
#[must_use]
pub fn reconcile_budget(
    project: &Project,
    categories: &[BudgetCategory],
) -> Option<BudgetReconciliation> {
    if categories.is_empty() {
        return None;
    }
    let totals = budget_totals(categories);
    let report = BudgetReconciliation {
        project_id: project.id.clone(),
        budget: project.budget,
        estimated_total: totals.estimated,
        budget_gap: project.budget - totals.estimated,
        spent: project.spent,
        actual_total: totals.actual,
        spent_gap: project.spent - totals.actual,
    };
    if !report.is_consistent() {
        tracing::debug!(
            project = %report.project_id,
            budget_gap = report.budget_gap,
            spent_gap = report.spent_gap,
            "project figures disagree with budget breakdown"
        );
    }
    Some(report)
}

/// `numerator / denominator * 100`, or 0 when the denominator is 0.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn percent_of(numerator: i64, denominator: i64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    (numerator as f64 * 100.0) / denominator as f64
}
