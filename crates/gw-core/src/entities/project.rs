use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ProjectStatus, ProjectType};

/// A live construction project.
///
/// `spent` is not bounded by `budget`; over-budget projects are valid data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,
    #[serde(rename = "type")]
    pub kind: ProjectType,
    pub status: ProjectStatus,
    /// Free-text construction phase, e.g. `Rough-In`.
    pub phase: String,
    pub budget: i64,
    pub spent: i64,
    /// Project manager name.
    pub pm: String,
    pub start_date: String,
    pub target_date: String,
    /// Completion percentage, `0..=100`.
    pub progress: u8,
    pub address: String,
}
