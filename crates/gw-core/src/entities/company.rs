use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    /// Initials rendered in the avatar bubble.
    pub avatar: String,
}

/// Revenue booked in one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MonthlyRevenue {
    /// Display label, e.g. `Mar 2025`.
    pub month: String,
    pub revenue: i64,
}
