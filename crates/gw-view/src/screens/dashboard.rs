use gw_core::RecordStore;
use gw_core::enums::ProjectStatus;
use serde::Serialize;

use super::{ActivityItem, ProjectCard, ViewLimits};
use crate::aggregate::{ChangeOrderSummary, change_order_summary};
use crate::format::{format_currency, pluralize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub active_projects: usize,
    pub active_label: String,
    pub total_budget: i64,
    pub total_budget_display: String,
    pub change_orders: ChangeOrderSummary,
    /// `1 pending approval`.
    pub change_order_label: String,
    pub projects: Vec<ProjectCard>,
    pub recent_activity: Vec<ActivityItem>,
}

/// Company-wide summary: stat chips, project cards, and the activity feed.
#[must_use]
pub fn build(store: &RecordStore, limits: &ViewLimits) -> Dashboard {
    let active: Vec<_> = store
        .projects
        .iter()
        .filter(|project| project.status != ProjectStatus::Complete)
        .collect();
    let total_budget: i64 = active.iter().map(|project| project.budget).sum();
    let change_orders = change_order_summary(&store.change_orders);

    Dashboard {
        active_projects: active.len(),
        active_label: pluralize(active.len(), "active project"),
        total_budget,
        total_budget_display: format_currency(total_budget),
        change_order_label: format!("{} pending approval", change_orders.pending),
        change_orders,
        projects: active.into_iter().map(ProjectCard::from).collect(),
        recent_activity: store
            .recent_activities(limits.dashboard_activity)
            .iter()
            .map(ActivityItem::from)
            .collect(),
    }
}
