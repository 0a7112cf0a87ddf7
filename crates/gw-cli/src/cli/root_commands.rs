use clap::{Args, Subcommand};

/// Top-level command tree. One command per screen.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Company dashboard: active projects, budget, change orders, activity.
    Dashboard,
    /// Project list with status filter and search.
    Projects(ProjectsArgs),
    /// One project's detail screen.
    Project(ProjectArgs),
    /// Revenue, status breakdown, and budget performance.
    Analytics,
    /// Client-facing portal for one project.
    Portal(PortalArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProjectsArgs {
    /// Status chip: all, building, permitting, complete
    #[arg(long)]
    pub status: Option<String>,
    /// Free-text match over name, client, and address
    #[arg(long)]
    pub search: Option<String>,
    /// Open an archived project's detail (use with `--status complete`)
    #[arg(long)]
    pub open: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ProjectArgs {
    pub id: String,
    /// Tab: overview, timeline, tasks, budget, files
    #[arg(long)]
    pub tab: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PortalArgs {
    /// Project id (defaults to `portal.project_id` from config)
    #[arg(long)]
    pub project: Option<String>,
    /// Tab: overview, budget, photos, updates, messages
    #[arg(long)]
    pub tab: Option<String>,
    /// Prefill the message composer
    #[arg(long)]
    pub draft: Option<String>,
    /// Show the change order dialog open with an empty draft
    #[arg(long)]
    pub change_order: bool,
}
