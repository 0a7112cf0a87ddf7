//! The read-only record store backing every Groundwork screen.
//!
//! A [`RecordStore`] is built once from a JSON fixture and then only read.
//! It is passed by reference into every view function; nothing in the
//! workspace keeps a global copy.
//!
//! Child records reference their project through `project_id`. No referential
//! integrity is enforced: a dangling id simply joins to an empty set.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{
    Activity, ArchivedProject, BudgetCategory, ChangeOrder, FileItem, Milestone, MonthlyRevenue,
    PhotoSet, PortalMessage, Project, Task, TeamMember,
};
use crate::errors::CoreError;

/// Demo dataset compiled into the binary.
pub const DEMO_FIXTURE: &str = include_str!("../fixtures/demo.json");

const FIXTURE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Every collection of the dataset, in fixture order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecordStore {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub archived_projects: Vec<ArchivedProject>,
    /// Budget breakdown per project id.
    #[serde(default)]
    pub budgets: BTreeMap<String, Vec<BudgetCategory>>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub files: Vec<FileItem>,
    #[serde(default)]
    pub change_orders: Vec<ChangeOrder>,
    /// Newest first.
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub monthly_revenue: Vec<MonthlyRevenue>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub messages: Vec<PortalMessage>,
    #[serde(default)]
    pub photo_sets: Vec<PhotoSet>,
}

impl RecordStore {
    /// Parse and validate a fixture from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let store: Self = serde_json::from_str(json)?;
        store.validate()?;
        tracing::debug!(
            projects = store.projects.len(),
            archived = store.archived_projects.len(),
            tasks = store.tasks.len(),
            files = store.files.len(),
            "record store loaded"
        );
        Ok(store)
    }

    /// Read, parse, and validate a fixture file.
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The embedded demo dataset.
    pub fn demo() -> Result<Self, CoreError> {
        Self::from_json(DEMO_FIXTURE)
    }

    /// Check structural invariants of the fixture.
    ///
    /// Hard violations (duplicate ids, out-of-range progress, negative
    /// amounts, duplicate category names) fail with [`CoreError::Validation`].
    /// Date problems are only logged; they surface when the date is formatted.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut problems = Vec::new();

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                problems.push(format!("duplicate project id '{}'", project.id));
            }
            if project.progress > 100 {
                problems.push(format!(
                    "project '{}' progress {} exceeds 100",
                    project.id, project.progress
                ));
            }
            if project.budget < 0 || project.spent < 0 {
                problems.push(format!("project '{}' has a negative amount", project.id));
            }
            warn_on_schedule(project);
        }

        let mut seen = HashSet::new();
        for archived in &self.archived_projects {
            if !seen.insert(archived.id.as_str()) {
                problems.push(format!("duplicate archived project id '{}'", archived.id));
            }
            if archived.budget < 0 {
                problems.push(format!(
                    "archived project '{}' has a negative budget",
                    archived.id
                ));
            }
        }

        for (project_id, categories) in &self.budgets {
            let mut names = HashSet::new();
            for category in categories {
                if !names.insert(category.name.as_str()) {
                    problems.push(format!(
                        "budget for '{project_id}' repeats category '{}'",
                        category.name
                    ));
                }
                if category.estimated < 0 || category.actual < 0 {
                    problems.push(format!(
                        "budget category '{}' for '{project_id}' has a negative amount",
                        category.name
                    ));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(problems.join("; ")))
        }
    }

    // -- lookups ------------------------------------------------------------

    #[must_use]
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Look up a project, reporting an unknown id as [`CoreError::NotFound`].
    pub fn require_project(&self, id: &str) -> Result<&Project, CoreError> {
        self.project(id)
            .ok_or_else(|| CoreError::not_found("project", id))
    }

    #[must_use]
    pub fn archived_project(&self, id: &str) -> Option<&ArchivedProject> {
        self.archived_projects.iter().find(|project| project.id == id)
    }

    pub fn require_archived_project(&self, id: &str) -> Result<&ArchivedProject, CoreError> {
        self.archived_project(id)
            .ok_or_else(|| CoreError::not_found("archived_project", id))
    }

    // -- joins by project id -----------------------------------------------

    /// Budget breakdown of a project; empty when none was recorded.
    #[must_use]
    pub fn budget_for(&self, project_id: &str) -> &[BudgetCategory] {
        self.budgets.get(project_id).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn milestones_for(&self, project_id: &str) -> Vec<&Milestone> {
        self.milestones
            .iter()
            .filter(|milestone| milestone.project_id == project_id)
            .collect()
    }

    #[must_use]
    pub fn tasks_for(&self, project_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.project_id == project_id)
            .collect()
    }

    #[must_use]
    pub fn files_for(&self, project_id: &str) -> Vec<&FileItem> {
        self.files
            .iter()
            .filter(|file| file.project_id == project_id)
            .collect()
    }

    #[must_use]
    pub fn change_orders_for(&self, project_id: &str) -> Vec<&ChangeOrder> {
        self.change_orders
            .iter()
            .filter(|change_order| change_order.project_id == project_id)
            .collect()
    }

    #[must_use]
    pub fn messages_for(&self, project_id: &str) -> Vec<&PortalMessage> {
        self.messages
            .iter()
            .filter(|message| message.project_id == project_id)
            .collect()
    }

    #[must_use]
    pub fn photo_sets_for(&self, project_id: &str) -> Vec<&PhotoSet> {
        self.photo_sets
            .iter()
            .filter(|set| set.project_id == project_id)
            .collect()
    }

    /// The newest `limit` feed entries.
    #[must_use]
    pub fn recent_activities(&self, limit: usize) -> &[Activity] {
        &self.activities[..limit.min(self.activities.len())]
    }
}

fn warn_on_schedule(project: &Project) {
    let start = NaiveDate::parse_from_str(&project.start_date, FIXTURE_DATE_FORMAT);
    let target = NaiveDate::parse_from_str(&project.target_date, FIXTURE_DATE_FORMAT);
    match (start, target) {
        (Ok(start), Ok(target)) if target < start => {
            tracing::warn!(
                project = %project.id,
                %start,
                %target,
                "project target date precedes its start date"
            );
        }
        (Ok(_), Ok(_)) => {}
        _ => {
            tracing::warn!(
                project = %project.id,
                start = %project.start_date,
                target = %project.target_date,
                "project has an unparseable schedule date"
            );
        }
    }
}
