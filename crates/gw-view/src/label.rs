//! Status badges and color tones.
//!
//! Badge text arrives from several record kinds (project status, change order
//! status, free text). [`StatusLabel::parse`] maps everything it recognizes to
//! a variant and keeps anything else verbatim in [`StatusLabel::Unknown`], so
//! an unexpected status still renders with a neutral badge.

use gw_core::enums::{ChangeOrderStatus, ProjectStatus, TaskPriority};
use serde::Serialize;

/// Semantic color bucket the presentation layer maps to its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Accent,
    Danger,
    Info,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusLabel {
    Building,
    Permitting,
    Complete,
    OnHold,
    Planning,
    Approved,
    Pending,
    Rejected,
    Unknown(String),
}

impl StatusLabel {
    /// Never fails: unrecognized text becomes [`StatusLabel::Unknown`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "building" => Self::Building,
            "permitting" => Self::Permitting,
            "complete" => Self::Complete,
            "on_hold" => Self::OnHold,
            "planning" => Self::Planning,
            "approved" => Self::Approved,
            "pending" => Self::Pending,
            "rejected" => Self::Rejected,
            other => Self::Unknown(other.to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Building => "Building",
            Self::Permitting => "Permitting",
            Self::Complete => "Complete",
            Self::OnHold => "On Hold",
            Self::Planning => "Planning",
            Self::Approved => "Approved",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
            Self::Unknown(raw) => raw,
        }
    }

    #[must_use]
    pub const fn tone(&self) -> Tone {
        match self {
            Self::Building | Self::Approved => Tone::Success,
            Self::Permitting | Self::Pending => Tone::Warning,
            Self::Complete => Tone::Accent,
            Self::OnHold | Self::Rejected => Tone::Danger,
            Self::Planning => Tone::Info,
            Self::Unknown(_) => Tone::Neutral,
        }
    }

    #[must_use]
    pub fn badge(&self) -> StatusBadge {
        StatusBadge {
            label: self.label().to_string(),
            tone: self.tone(),
        }
    }
}

impl From<ProjectStatus> for StatusLabel {
    fn from(status: ProjectStatus) -> Self {
        Self::parse(status.as_str())
    }
}

impl From<ChangeOrderStatus> for StatusLabel {
    fn from(status: ChangeOrderStatus) -> Self {
        Self::parse(status.as_str())
    }
}

/// Rendered badge: display text plus tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: String,
    pub tone: Tone,
}

impl From<ProjectStatus> for StatusBadge {
    fn from(status: ProjectStatus) -> Self {
        StatusLabel::from(status).badge()
    }
}

impl From<ChangeOrderStatus> for StatusBadge {
    fn from(status: ChangeOrderStatus) -> Self {
        StatusLabel::from(status).badge()
    }
}

#[must_use]
pub const fn priority_tone(priority: TaskPriority) -> Tone {
    match priority {
        TaskPriority::High => Tone::Danger,
        TaskPriority::Medium => Tone::Warning,
        TaskPriority::Low => Tone::Success,
    }
}
