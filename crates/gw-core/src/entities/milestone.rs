use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A schedule milestone. Fixture order is timeline order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Milestone {
    pub id: String,
    pub name: String,
    pub date: String,
    pub completed: bool,
    pub project_id: String,
}
