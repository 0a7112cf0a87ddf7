use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ActivityType;

/// An entry of the company-wide activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub message: String,
    pub user: String,
    /// Relative display text (`2 hours ago`), not a sortable instant.
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
}
