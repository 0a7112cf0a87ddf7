//! Assembled, owned view-models for every Groundwork screen.
//!
//! Each screen module exposes a `build` function taking the
//! [`RecordStore`](gw_core::RecordStore), the screen's state, and the
//! [`ViewLimits`]. The returned structs own their strings and serialize
//! directly, so a presentation layer needs no further lookups.
//!
//! This module also holds the row and card types shared across screens.

pub mod analytics;
pub mod dashboard;
pub mod detail;
pub mod portal;
pub mod projects;

use gw_core::entities::{Activity, ArchivedProject, BudgetCategory, ChangeOrder, Milestone, Project};
use gw_core::enums::{ActivityType, BudgetStatus, ChangeOrderStatus, ProjectStatus};
use serde::Serialize;

use crate::aggregate::{category_bar_width, category_ratio, category_tone, is_over_budget};
use crate::format::{
    CurrencyStyle, DateDisplay, clamp_percent, format_currency, format_currency_full,
    format_currency_with,
};
use crate::label::{StatusBadge, Tone};

/// How many feed entries each screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewLimits {
    pub dashboard_activity: usize,
    pub detail_activity: usize,
    pub portal_updates: usize,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            dashboard_activity: 8,
            detail_activity: 5,
            portal_updates: 8,
        }
    }
}

/// One entry of a tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabChip {
    pub label: &'static str,
    pub active: bool,
}

/// Project summary card, amounts in full style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub name: String,
    pub client: String,
    pub type_label: &'static str,
    pub status: StatusBadge,
    pub phase: String,
    pub pm: String,
    pub progress: u8,
    pub progress_width: f64,
    pub budget_display: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            client: project.client.clone(),
            type_label: project.kind.label(),
            status: project.status.into(),
            phase: project.phase.clone(),
            pm: project.pm.clone(),
            progress: project.progress,
            progress_width: clamp_percent(f64::from(project.progress)),
            budget_display: format_currency_full(project.budget),
        }
    }
}

/// Completed project tile, amounts in compact style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchivedCard {
    pub id: String,
    pub name: String,
    pub client: String,
    pub status: StatusBadge,
    pub budget_display: String,
    pub duration: String,
    pub has_testimonial: bool,
}

impl From<&ArchivedProject> for ArchivedCard {
    fn from(project: &ArchivedProject) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            client: project.client.clone(),
            status: StatusBadge::from(ProjectStatus::Complete),
            budget_display: format_currency(project.budget),
            duration: project.duration.clone(),
            has_testimonial: project.testimonial.is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    pub id: String,
    pub message: String,
    pub user: String,
    pub timestamp: String,
    pub kind: ActivityType,
    pub tone: Tone,
}

impl From<&Activity> for ActivityItem {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id.clone(),
            message: activity.message.clone(),
            user: activity.user.clone(),
            timestamp: activity.timestamp.clone(),
            kind: activity.kind,
            tone: activity_tone(activity.kind),
        }
    }
}

/// Feed dot color per entry type.
#[must_use]
pub const fn activity_tone(kind: ActivityType) -> Tone {
    match kind {
        ActivityType::Update => Tone::Accent,
        ActivityType::Milestone => Tone::Success,
        ActivityType::Budget => Tone::Warning,
        ActivityType::File => Tone::Info,
        ActivityType::Message => Tone::Neutral,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneItem {
    pub id: String,
    pub name: String,
    pub date: DateDisplay,
    pub completed: bool,
}

impl From<&Milestone> for MilestoneItem {
    fn from(milestone: &Milestone) -> Self {
        Self {
            id: milestone.id.clone(),
            name: milestone.name.clone(),
            date: DateDisplay::date(&milestone.date),
            completed: milestone.completed,
        }
    }
}

/// One horizontal bar of a budget breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBar {
    pub name: String,
    pub status: BudgetStatus,
    pub estimated: i64,
    pub actual: i64,
    pub estimated_display: String,
    pub actual_display: String,
    /// Unclamped `actual / estimated` percentage.
    pub ratio: f64,
    pub bar_width: f64,
    pub over_budget: bool,
    pub tone: Tone,
}

impl CategoryBar {
    #[must_use]
    pub fn build(category: &BudgetCategory, style: CurrencyStyle) -> Self {
        Self {
            name: category.name.clone(),
            status: category.status,
            estimated: category.estimated,
            actual: category.actual,
            estimated_display: format_currency_with(category.estimated, style),
            actual_display: format_currency_with(category.actual, style),
            ratio: category_ratio(category),
            bar_width: category_bar_width(category),
            over_budget: is_over_budget(category),
            tone: category_tone(category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeOrderRow {
    pub id: String,
    pub title: String,
    pub amount: i64,
    pub amount_display: String,
    pub status: ChangeOrderStatus,
    pub badge: StatusBadge,
    pub date: DateDisplay,
}

impl From<&ChangeOrder> for ChangeOrderRow {
    fn from(change_order: &ChangeOrder) -> Self {
        Self {
            id: change_order.id.clone(),
            title: change_order.title.clone(),
            amount: change_order.amount,
            amount_display: format_currency_full(change_order.amount),
            status: change_order.status,
            badge: change_order.status.into(),
            date: DateDisplay::date(&change_order.date),
        }
    }
}
