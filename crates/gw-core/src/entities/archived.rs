use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectType;

/// A finished job kept for the portfolio. Stored apart from [`super::Project`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArchivedProject {
    pub id: String,
    pub name: String,
    pub client: String,
    #[serde(rename = "type")]
    pub kind: ProjectType,
    pub budget: i64,
    pub completed_date: String,
    /// Display label such as `14 months`.
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<String>,
    pub address: String,
}
