//! Selection, tab, and dialog state for each screen.
//!
//! State values are plain data owned by the caller. Transitions are methods
//! that mutate in place; rendering reads the state together with a
//! [`gw_core::RecordStore`] and never writes back to either.

use serde::{Deserialize, Serialize};

use crate::filter::StatusFilter;

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Nullable single selection, e.g. the archived record shown in a modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection<T>(Option<T>);

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Selection<T> {
    pub fn open(&mut self, value: T) {
        self.0 = Some(value);
    }

    pub fn close(&mut self) {
        self.0 = None;
    }

    #[must_use]
    pub const fn current(&self) -> Option<&T> {
        self.0.as_ref()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.0.is_some()
    }
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectTab {
    #[default]
    Overview,
    Timeline,
    Tasks,
    Budget,
    Files,
}

impl ProjectTab {
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Timeline,
        Self::Tasks,
        Self::Budget,
        Self::Files,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Timeline => "Timeline",
            Self::Tasks => "Tasks",
            Self::Budget => "Budget",
            Self::Files => "Files",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortalTab {
    #[default]
    Overview,
    Budget,
    Photos,
    Updates,
    Messages,
}

impl PortalTab {
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Budget,
        Self::Photos,
        Self::Updates,
        Self::Messages,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Budget => "Budget",
            Self::Photos => "Photos",
            Self::Updates => "Updates",
            Self::Messages => "Messages",
        }
    }
}

// ---------------------------------------------------------------------------
// Change order dialog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeOrderDraft {
    pub title: String,
    pub description: String,
}

/// Two-phase request dialog: form, then confirmation.
///
/// `Submitted` carries no draft, and reopening always starts from an empty
/// one, so stale text cannot leak into a new request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "draft", rename_all = "snake_case")]
pub enum ChangeOrderDialog {
    #[default]
    Closed,
    Editing(ChangeOrderDraft),
    Submitted,
}

impl ChangeOrderDialog {
    /// Open with a fresh draft from any state.
    pub fn open(&mut self) {
        *self = Self::Editing(ChangeOrderDraft::default());
        tracing::debug!("change order dialog opened");
    }

    /// Returns `false` when the form is not showing.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        match self {
            Self::Editing(draft) => {
                draft.title = title.into();
                true
            }
            Self::Closed | Self::Submitted => false,
        }
    }

    /// Returns `false` when the form is not showing.
    pub fn set_description(&mut self, description: impl Into<String>) -> bool {
        match self {
            Self::Editing(draft) => {
                draft.description = description.into();
                true
            }
            Self::Closed | Self::Submitted => false,
        }
    }

    /// Move from the form to the confirmation, returning the submitted draft.
    ///
    /// The request is not recorded anywhere; it only lives in the return value.
    pub fn submit(&mut self) -> Option<ChangeOrderDraft> {
        match std::mem::take(self) {
            Self::Editing(draft) => {
                *self = Self::Submitted;
                tracing::debug!(title = %draft.title, "change order request submitted");
                Some(draft)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Explicit close control (the X button, Cancel, or Done).
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Clicking outside the dialog behaves like close.
    pub fn dismiss_backdrop(&mut self) {
        self.close();
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub const fn draft(&self) -> Option<&ChangeOrderDraft> {
        match self {
            Self::Editing(draft) => Some(draft),
            Self::Closed | Self::Submitted => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Screen state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectsScreenState {
    pub filter: StatusFilter,
    pub search: String,
    /// Id of the archived project shown in the detail modal.
    pub selected_archived: Selection<String>,
}

impl ProjectsScreenState {
    /// Changing the filter always closes the archived detail modal.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        tracing::debug!(from = self.filter.label(), to = filter.label(), "filter changed");
        self.filter = filter;
        self.selected_archived.close();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn open_archived(&mut self, id: impl Into<String>) {
        self.selected_archived.open(id.into());
    }

    pub fn close_archived(&mut self) {
        self.selected_archived.close();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetailState {
    pub project_id: String,
    pub tab: ProjectTab,
}

impl ProjectDetailState {
    #[must_use]
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            tab: ProjectTab::default(),
        }
    }

    pub fn select_tab(&mut self, tab: ProjectTab) {
        tracing::debug!(project = %self.project_id, tab = tab.label(), "detail tab selected");
        self.tab = tab;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortalState {
    pub project_id: String,
    pub tab: PortalTab,
    pub message_draft: String,
    pub change_order: ChangeOrderDialog,
}

impl PortalState {
    #[must_use]
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            tab: PortalTab::default(),
            message_draft: String::new(),
            change_order: ChangeOrderDialog::default(),
        }
    }

    pub fn select_tab(&mut self, tab: PortalTab) {
        tracing::debug!(project = %self.project_id, tab = tab.label(), "portal tab selected");
        self.tab = tab;
    }

    pub fn set_message_draft(&mut self, text: impl Into<String>) {
        self.message_draft = text.into();
    }
}
