use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::BudgetStatus;

/// One line of a project's budget breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BudgetCategory {
    /// Unique within a single breakdown.
    pub name: String,
    pub estimated: i64,
    pub actual: i64,
    pub status: BudgetStatus,
}
