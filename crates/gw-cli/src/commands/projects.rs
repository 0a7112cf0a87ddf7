use gw_view::filter::StatusFilter;
use gw_view::screens::projects::{self, ProjectsScreen};
use gw_view::state::ProjectsScreenState;

use crate::cli::{GlobalFlags, ProjectsArgs};
use crate::commands::shared::parse::parse_or_default;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gw projects`.
pub fn handle(args: &ProjectsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = run(args, ctx)?;
    output(&view, flags.format)
}

fn run(args: &ProjectsArgs, ctx: &AppContext) -> anyhow::Result<ProjectsScreen> {
    let state = screen_state(args)?;
    Ok(projects::build(&ctx.store, &state)?)
}

fn screen_state(args: &ProjectsArgs) -> anyhow::Result<ProjectsScreenState> {
    let mut state = ProjectsScreenState::default();
    state.set_filter(parse_or_default::<StatusFilter>(args.status.as_deref(), "status")?);
    if let Some(search) = &args.search {
        state.set_search(search.as_str());
    }
    // Opened after the filter so set_filter does not close it again.
    if let Some(id) = &args.open {
        state.open_archived(id.as_str());
    }
    Ok(state)
}
