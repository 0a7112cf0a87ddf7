//! Entity structs for every Groundwork record.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! fixture can be loaded from JSON and checked against a generated schema.
//! Dates are kept as the `YYYY-MM-DD` text found in the fixture; parsing
//! happens at formatting time so a bad date is reported where it is shown.

mod activity;
mod archived;
mod budget;
mod change_order;
mod company;
mod file;
mod milestone;
mod portal;
mod project;
mod task;

pub use activity::Activity;
pub use archived::ArchivedProject;
pub use budget::BudgetCategory;
pub use change_order::ChangeOrder;
pub use company::{MonthlyRevenue, TeamMember};
pub use file::FileItem;
pub use milestone::Milestone;
pub use portal::{PhotoSet, PortalMessage};
pub use project::Project;
pub use task::Task;
