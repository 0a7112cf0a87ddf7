use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A message in the client portal thread.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PortalMessage {
    pub id: String,
    pub project_id: String,
    pub from: String,
    pub initials: String,
    /// `true` when sent by the construction team rather than the client.
    pub is_owner: bool,
    pub text: String,
    pub timestamp: String,
}

/// A batch of progress photos uploaded from the job site.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PhotoSet {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub date: String,
    pub count: u32,
}
