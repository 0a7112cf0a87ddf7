use gw_view::screens::detail::{self, ProjectDetail};
use gw_view::state::{ProjectDetailState, ProjectTab};

use crate::cli::{GlobalFlags, ProjectArgs};
use crate::commands::shared::parse::parse_or_default;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gw project <ID>`.
pub fn handle(args: &ProjectArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = run(args, ctx)?;
    output(&view, flags.format)
}

fn run(args: &ProjectArgs, ctx: &AppContext) -> anyhow::Result<ProjectDetail> {
    let mut state = ProjectDetailState::new(args.id.as_str());
    state.select_tab(parse_or_default::<ProjectTab>(args.tab.as_deref(), "tab")?);
    Ok(detail::build(&ctx.store, &state, &ctx.limits)?)
}
