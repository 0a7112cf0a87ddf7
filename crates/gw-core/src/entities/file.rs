use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A document attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FileItem {
    pub id: String,
    pub name: String,
    /// Free-text grouping key (`Plans`, `Permits`, ...).
    pub category: String,
    pub date: String,
    /// Pre-rendered size label such as `14.2 MB`.
    pub size: String,
    pub project_id: String,
}
