use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ChangeOrderStatus;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChangeOrder {
    pub id: String,
    pub title: String,
    pub amount: i64,
    pub status: ChangeOrderStatus,
    pub project_id: String,
    pub date: String,
}
