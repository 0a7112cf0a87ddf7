//! Status filter and free-text search over projects.
//!
//! A query matches when it is a case-insensitive substring of the record's
//! name, client, or address. The empty query matches everything. Results keep
//! input order.

use gw_core::entities::{ArchivedProject, Project};
use gw_core::enums::ProjectStatus;
use serde::{Deserialize, Serialize};

/// Top-level filter chip on the projects screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Building,
    Permitting,
    /// Routes the projects screen to the archived collection.
    Complete,
}

impl StatusFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Building, Self::Permitting, Self::Complete];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Building => "Building",
            Self::Permitting => "Permitting",
            Self::Complete => "Complete",
        }
    }

    /// Parse a chip label, ignoring case.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.label().eq_ignore_ascii_case(raw.trim()))
    }

    /// `All` matches every status; any other chip compares its lowercased
    /// label to the stored status string.
    #[must_use]
    pub fn matches(self, status: ProjectStatus) -> bool {
        match self {
            Self::All => true,
            other => status.as_str() == other.label().to_lowercase(),
        }
    }

    /// Whether selecting this chip swaps the data source to archived projects.
    #[must_use]
    pub const fn shows_archive(self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Case-insensitive substring match across the given fields.
#[must_use]
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[must_use]
pub fn filter_projects<'a>(
    projects: &'a [Project],
    filter: StatusFilter,
    query: &str,
) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| {
            filter.matches(project.status)
                && matches_query(query, &[&project.name, &project.client, &project.address])
        })
        .collect()
}

#[must_use]
pub fn filter_archived<'a>(archived: &'a [ArchivedProject], query: &str) -> Vec<&'a ArchivedProject> {
    archived
        .iter()
        .filter(|project| {
            matches_query(query, &[&project.name, &project.client, &project.address])
        })
        .collect()
}
