//! Single project view: header, tab strip, and the active tab's content.
//!
//! Only the active tab is assembled. Child records are joined by project id;
//! an empty join yields the tab's empty-state message.

use gw_core::RecordStore;
use gw_core::entities::{FileItem, Project, Task};
use gw_core::enums::{TaskPriority, TaskStatus};
use serde::Serialize;

use super::{ActivityItem, CategoryBar, ChangeOrderRow, MilestoneItem, TabChip, ViewLimits};
use crate::aggregate::{
    BudgetReconciliation, breakdown_variance_pct, budget_variance, reconcile_budget,
};
use crate::error::ViewError;
use crate::format::{
    CurrencyStyle, DateDisplay, clamp_percent, format_currency_full, format_signed_percent,
};
use crate::group::{group_files_by_category, group_tasks_by_status};
use crate::label::{StatusBadge, Tone, priority_tone};
use crate::state::{ProjectDetailState, ProjectTab};

pub const NO_MILESTONES: &str = "Timeline milestones coming soon for this project.";
pub const NO_TASKS: &str = "No tasks have been created for this project yet.";
pub const NO_BREAKDOWN: &str = "Detailed budget breakdown not yet available for this project.";
pub const NO_CHANGE_ORDERS: &str = "No change orders for this project.";
pub const NO_FILES: &str = "No files have been uploaded for this project yet.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailHeader {
    pub id: String,
    pub name: String,
    pub client: String,
    pub address: String,
    pub pm: String,
    pub status: StatusBadge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewTab {
    pub budget_display: String,
    pub spent_display: String,
    pub progress: u8,
    pub progress_width: f64,
    pub target_date: DateDisplay,
    pub details: Vec<DetailField>,
    pub recent_activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineTab {
    pub milestones: Vec<MilestoneItem>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCard {
    pub id: String,
    pub title: String,
    pub assignee: String,
    pub priority: TaskPriority,
    pub priority_tone: Tone,
}

impl From<&Task> for TaskCard {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            assignee: task.assignee.clone(),
            priority: task.priority,
            priority_tone: priority_tone(task.priority),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskColumn {
    pub status: TaskStatus,
    pub label: &'static str,
    pub count: usize,
    pub tasks: Vec<TaskCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TasksTab {
    /// Always three columns, even when the board is empty.
    pub columns: Vec<TaskColumn>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetTab {
    pub budget_display: String,
    pub spent_display: String,
    /// Project `budget - spent`.
    pub remaining: i64,
    pub remaining_display: String,
    pub remaining_tone: Tone,
    /// Breakdown `(estimated - actual) / estimated`.
    pub variance_pct: f64,
    pub variance_display: String,
    pub variance_tone: Tone,
    pub categories: Vec<CategoryBar>,
    pub breakdown_empty: Option<&'static str>,
    pub change_orders: Vec<ChangeOrderRow>,
    pub change_orders_empty: Option<&'static str>,
    /// Present when the project has a breakdown to compare against.
    pub reconciliation: Option<BudgetReconciliation>,
}

/// Coarse document kind shown beside each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileIcon {
    Photo,
    Drawing,
    Permit,
    Contract,
    ChangeOrder,
    Document,
}

#[must_use]
pub fn file_icon(category: &str) -> FileIcon {
    match category {
        "Photos" => FileIcon::Photo,
        "Plans" => FileIcon::Drawing,
        "Permits" => FileIcon::Permit,
        "Contracts" => FileIcon::Contract,
        "Change Orders" => FileIcon::ChangeOrder,
        _ => FileIcon::Document,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRow {
    pub id: String,
    pub name: String,
    pub icon: FileIcon,
    pub date: DateDisplay,
    pub size: String,
}

impl From<&FileItem> for FileRow {
    fn from(file: &FileItem) -> Self {
        Self {
            id: file.id.clone(),
            name: file.name.clone(),
            icon: file_icon(&file.category),
            date: DateDisplay::date(&file.date),
            size: file.size.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSection {
    pub category: String,
    pub files: Vec<FileRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilesTab {
    pub sections: Vec<FileSection>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "snake_case")]
pub enum DetailContent {
    Overview(OverviewTab),
    Timeline(TimelineTab),
    Tasks(TasksTab),
    Budget(BudgetTab),
    Files(FilesTab),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetail {
    pub header: DetailHeader,
    pub tabs: Vec<TabChip>,
    pub content: DetailContent,
}

/// Assemble the detail screen for `state.project_id`.
///
/// An unknown id fails with a not-found [`ViewError`]; the caller renders
/// its own "back to projects" state. Unparseable dates only mark their own
/// cells.
pub fn build(
    store: &RecordStore,
    state: &ProjectDetailState,
    limits: &ViewLimits,
) -> Result<ProjectDetail, ViewError> {
    let project = store.require_project(&state.project_id)?;

    let content = match state.tab {
        ProjectTab::Overview => DetailContent::Overview(overview(store, project, limits)),
        ProjectTab::Timeline => DetailContent::Timeline(timeline(store, project)),
        ProjectTab::Tasks => DetailContent::Tasks(tasks(store, project)),
        ProjectTab::Budget => DetailContent::Budget(budget(store, project)),
        ProjectTab::Files => DetailContent::Files(files(store, project)),
    };

    Ok(ProjectDetail {
        header: DetailHeader {
            id: project.id.clone(),
            name: project.name.clone(),
            client: project.client.clone(),
            address: project.address.clone(),
            pm: project.pm.clone(),
            status: project.status.into(),
        },
        tabs: ProjectTab::ALL
            .into_iter()
            .map(|tab| TabChip {
                label: tab.label(),
                active: tab == state.tab,
            })
            .collect(),
        content,
    })
}

fn overview(store: &RecordStore, project: &Project, limits: &ViewLimits) -> OverviewTab {
    let start = DateDisplay::date(&project.start_date);
    let target = DateDisplay::date(&project.target_date);
    OverviewTab {
        budget_display: format_currency_full(project.budget),
        spent_display: format_currency_full(project.spent),
        progress: project.progress,
        progress_width: clamp_percent(f64::from(project.progress)),
        target_date: target.clone(),
        details: vec![
            DetailField {
                label: "Type",
                value: project.kind.label().to_string(),
            },
            DetailField {
                label: "Phase",
                value: project.phase.clone(),
            },
            DetailField {
                label: "Project Manager",
                value: project.pm.clone(),
            },
            DetailField {
                label: "Start Date",
                value: start.text().to_string(),
            },
            DetailField {
                label: "Target Date",
                value: target.text().to_string(),
            },
        ],
        // The company feed carries no project id; the detail screen shows its head.
        recent_activity: store
            .recent_activities(limits.detail_activity)
            .iter()
            .map(ActivityItem::from)
            .collect(),
    }
}

fn timeline(store: &RecordStore, project: &Project) -> TimelineTab {
    let milestones: Vec<MilestoneItem> = store
        .milestones_for(&project.id)
        .into_iter()
        .map(MilestoneItem::from)
        .collect();
    TimelineTab {
        empty_message: milestones.is_empty().then_some(NO_MILESTONES),
        milestones,
    }
}

fn tasks(store: &RecordStore, project: &Project) -> TasksTab {
    let groups = group_tasks_by_status(store.tasks_for(&project.id));
    let columns = groups
        .columns()
        .map(|(status, column)| TaskColumn {
            status,
            label: status.label(),
            count: column.len(),
            tasks: column.iter().map(|task| TaskCard::from(*task)).collect(),
        })
        .collect();
    TasksTab {
        columns,
        empty_message: groups.is_empty().then_some(NO_TASKS),
    }
}

fn budget(store: &RecordStore, project: &Project) -> BudgetTab {
    let categories = store.budget_for(&project.id);
    let remaining = budget_variance(project.budget, project.spent);
    let variance_pct = breakdown_variance_pct(categories);
    let change_orders: Vec<ChangeOrderRow> = store
        .change_orders_for(&project.id)
        .into_iter()
        .map(ChangeOrderRow::from)
        .collect();

    BudgetTab {
        budget_display: format_currency_full(project.budget),
        spent_display: format_currency_full(project.spent),
        remaining: remaining.variance,
        remaining_display: format_currency_full(remaining.variance),
        remaining_tone: remaining.tone(),
        variance_pct,
        variance_display: format_signed_percent(variance_pct),
        variance_tone: if variance_pct < 0.0 {
            Tone::Danger
        } else {
            Tone::Success
        },
        categories: categories
            .iter()
            .map(|category| CategoryBar::build(category, CurrencyStyle::Full))
            .collect(),
        breakdown_empty: categories.is_empty().then_some(NO_BREAKDOWN),
        change_orders_empty: change_orders.is_empty().then_some(NO_CHANGE_ORDERS),
        change_orders,
        reconciliation: reconcile_budget(project, categories),
    }
}

fn files(store: &RecordStore, project: &Project) -> FilesTab {
    let groups = group_files_by_category(store.files_for(&project.id));
    let sections: Vec<FileSection> = groups
        .iter()
        .map(|(category, files)| FileSection {
            category: category.to_string(),
            files: files.iter().map(|file| FileRow::from(*file)).collect(),
        })
        .collect();
    FilesTab {
        empty_message: sections.is_empty().then_some(NO_FILES),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn detail(project_id: &str, tab: ProjectTab) -> ProjectDetail {
        let store = RecordStore::demo().unwrap();
        let mut state = ProjectDetailState::new(project_id);
        state.select_tab(tab);
        build(&store, &state, &ViewLimits::default()).unwrap()
    }

    #[test]
    fn unknown_project_is_not_found() {
        let store = RecordStore::demo().unwrap();
        let state = ProjectDetailState::new("atlantis");
        let err = build(&store, &state, &ViewLimits::default()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: project atlantis");
    }

    #[test]
    fn overview_uses_full_currency_and_formatted_dates() {
        let view = detail("bloemhof", ProjectTab::Overview);
        assert_eq!(view.header.name, "Bloemhof Residence");
        assert!(view.tabs[0].active);
        let DetailContent::Overview(overview) = view.content else {
            panic!("expected overview");
        };
        assert_eq!(overview.budget_display, "$1,200,000");
        assert_eq!(overview.spent_display, "$780,000");
        assert_eq!(overview.target_date.text(), "Aug 30, 2026");
        assert_eq!(overview.details[3].value, "Jun 15, 2025");
        assert_eq!(overview.details[0].value, "Custom Home");
        assert_eq!(overview.recent_activity.len(), 5);
    }

    #[test]
    fn timeline_keeps_fixture_order() {
        let DetailContent::Timeline(timeline) = detail("bloemhof", ProjectTab::Timeline).content
        else {
            panic!("expected timeline");
        };
        let ids: Vec<&str> = timeline.milestones.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["ms-1", "ms-2", "ms-3", "ms-4", "ms-5", "ms-6", "ms-7", "ms-8"]
        );
        assert_eq!(timeline.empty_message, None);
    }

    #[test]
    fn tasks_render_three_columns() {
        let DetailContent::Tasks(tasks) = detail("bloemhof", ProjectTab::Tasks).content else {
            panic!("expected tasks");
        };
        let shape: Vec<(&str, usize)> = tasks
            .columns
            .iter()
            .map(|column| (column.label, column.count))
            .collect();
        assert_eq!(shape, vec![("To Do", 4), ("In Progress", 3), ("Done", 3)]);
        assert_eq!(tasks.columns[1].tasks[0].priority_tone, Tone::Danger);
    }

    #[test]
    fn budget_tab_keeps_both_sources() {
        let DetailContent::Budget(budget) = detail("bloemhof", ProjectTab::Budget).content else {
            panic!("expected budget");
        };
        assert_eq!(budget.remaining_display, "$420,000");
        assert_eq!(budget.remaining_tone, Tone::Success);
        assert_eq!(budget.categories.len(), 16);
        assert_eq!(budget.change_orders.len(), 2);
        assert_eq!(budget.change_orders[1].amount_display, "$12,800");
        assert!(budget.variance_display.starts_with('+'));
        let reconciliation = budget.reconciliation.unwrap();
        assert_eq!(reconciliation.spent_gap, 33_000);
    }

    #[test]
    fn empty_joins_render_empty_states() {
        let DetailContent::Timeline(timeline) = detail("crestmont", ProjectTab::Timeline).content
        else {
            panic!("expected timeline");
        };
        assert_eq!(timeline.empty_message, Some(NO_MILESTONES));

        let DetailContent::Tasks(tasks) = detail("crestmont", ProjectTab::Tasks).content else {
            panic!("expected tasks");
        };
        assert_eq!(tasks.columns.len(), 3);
        assert_eq!(tasks.empty_message, Some(NO_TASKS));

        let DetailContent::Budget(budget) = detail("crestmont", ProjectTab::Budget).content else {
            panic!("expected budget");
        };
        assert_eq!(budget.breakdown_empty, Some(NO_BREAKDOWN));
        assert_eq!(budget.change_orders_empty, Some(NO_CHANGE_ORDERS));
        assert_eq!(budget.variance_display, "+0.0%");
        assert_eq!(budget.reconciliation, None);

        let DetailContent::Files(files) = detail("crestmont", ProjectTab::Files).content else {
            panic!("expected files");
        };
        assert_eq!(files.empty_message, Some(NO_FILES));
    }

    #[test]
    fn files_group_by_category_with_icons() {
        let DetailContent::Files(files) = detail("bloemhof", ProjectTab::Files).content else {
            panic!("expected files");
        };
        let categories: Vec<&str> = files.sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["Plans", "Permits", "Change Orders", "Contracts", "Photos"]
        );
        assert_eq!(files.sections[0].files.len(), 3);
        assert_eq!(files.sections[0].files[0].icon, FileIcon::Drawing);
        assert_eq!(files.sections[0].files[0].date.text(), "Jun 10, 2025");
        assert_eq!(file_icon("Invoices"), FileIcon::Document);
    }

    #[test]
    fn one_bad_file_date_marks_only_that_row() {
        let mut store = RecordStore::demo().unwrap();
        let first_bloemhof = store
            .files
            .iter()
            .position(|file| file.project_id == "bloemhof")
            .unwrap();
        store.files[first_bloemhof].date = "TBD".into();

        let mut state = ProjectDetailState::new("bloemhof");
        state.select_tab(ProjectTab::Files);
        let view = build(&store, &state, &ViewLimits::default()).unwrap();
        let DetailContent::Files(files) = view.content else {
            panic!("expected files");
        };

        let rows: Vec<&FileRow> = files.sections.iter().flat_map(|s| &s.files).collect();
        let invalid: Vec<&str> = rows
            .iter()
            .filter(|row| !row.date.is_valid())
            .map(|row| row.id.as_str())
            .collect();
        assert_eq!(invalid, vec![store.files[first_bloemhof].id.as_str()]);
        assert_eq!(files.sections[0].files[0].date.text(), "Invalid Date");
        assert!(rows.len() > 1);
    }

    #[test]
    fn bad_target_date_keeps_overview_renderable() {
        let mut store = RecordStore::demo().unwrap();
        let bloemhof = store
            .projects
            .iter_mut()
            .find(|project| project.id == "bloemhof")
            .unwrap();
        bloemhof.target_date = "Spring 2026".into();

        let view = build(
            &store,
            &ProjectDetailState::new("bloemhof"),
            &ViewLimits::default(),
        )
        .unwrap();
        let DetailContent::Overview(overview) = view.content else {
            panic!("expected overview");
        };
        assert_eq!(overview.target_date, DateDisplay::Invalid("Spring 2026".into()));
        assert_eq!(overview.details[4].value, "Invalid Date");
        assert_eq!(overview.details[3].value, "Jun 15, 2025");
    }
}
