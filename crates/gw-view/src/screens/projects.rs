//! Project list: filter chips, search, and the archived record modal.
//!
//! Selecting the `Complete` chip swaps the listing to the archived
//! collection. The archived detail modal renders whenever a selection is
//! open, independent of the current search.

use gw_core::RecordStore;
use gw_core::entities::ArchivedProject;
use serde::Serialize;

use super::{ArchivedCard, ProjectCard, TabChip};
use crate::error::ViewError;
use crate::filter::{StatusFilter, filter_archived, filter_projects};
use crate::format::{DateDisplay, format_currency, pluralize};
use crate::state::ProjectsScreenState;

pub const NO_PROJECTS: &str = "No projects found";
pub const NO_ARCHIVED: &str = "No completed projects found";
pub const NO_TESTIMONIAL: &str = "No testimonial yet";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "cards", rename_all = "snake_case")]
pub enum ProjectListing {
    Active(Vec<ProjectCard>),
    Archived(Vec<ArchivedCard>),
}

impl ProjectListing {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Active(cards) => cards.len(),
            Self::Archived(cards) => cards.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchivedDetail {
    pub id: String,
    pub name: String,
    pub client: String,
    pub address: String,
    pub type_label: &'static str,
    pub budget_display: String,
    pub duration: String,
    /// `November 2024`.
    pub completed: DateDisplay,
    pub testimonial: Option<String>,
}

impl From<&ArchivedProject> for ArchivedDetail {
    fn from(project: &ArchivedProject) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            client: project.client.clone(),
            address: project.address.clone(),
            type_label: project.kind.label(),
            budget_display: format_currency(project.budget),
            duration: project.duration.clone(),
            completed: DateDisplay::month_year(&project.completed_date),
            testimonial: project.testimonial.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectsScreen {
    pub filters: Vec<TabChip>,
    pub search: String,
    /// `3 active projects` or `8 completed projects`.
    pub count_label: String,
    pub listing: ProjectListing,
    pub empty_message: Option<&'static str>,
    pub selected: Option<ArchivedDetail>,
}

/// Render the list for the current filter, search, and selection.
///
/// A selection naming an unknown archived id is reported as not found.
pub fn build(store: &RecordStore, state: &ProjectsScreenState) -> Result<ProjectsScreen, ViewError> {
    let (count_label, listing, empty) = if state.filter.shows_archive() {
        let cards: Vec<ArchivedCard> = filter_archived(&store.archived_projects, &state.search)
            .into_iter()
            .map(ArchivedCard::from)
            .collect();
        (
            pluralize(cards.len(), "completed project"),
            ProjectListing::Archived(cards),
            NO_ARCHIVED,
        )
    } else {
        let cards: Vec<ProjectCard> = filter_projects(&store.projects, state.filter, &state.search)
            .into_iter()
            .map(ProjectCard::from)
            .collect();
        (
            pluralize(cards.len(), "active project"),
            ProjectListing::Active(cards),
            NO_PROJECTS,
        )
    };

    let selected = state
        .selected_archived
        .current()
        .map(|id| store.require_archived_project(id))
        .transpose()?
        .map(ArchivedDetail::from);

    Ok(ProjectsScreen {
        filters: StatusFilter::ALL
            .into_iter()
            .map(|filter| TabChip {
                label: filter.label(),
                active: filter == state.filter,
            })
            .collect(),
        search: state.search.clone(),
        count_label,
        empty_message: listing.is_empty().then_some(empty),
        listing,
        selected,
    })
}
