use gw_view::screens::portal::{self, Portal};
use gw_view::state::{PortalState, PortalTab};

use crate::cli::{GlobalFlags, PortalArgs};
use crate::commands::shared::parse::parse_or_default;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gw portal`.
pub fn handle(args: &PortalArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = run(args, ctx)?;
    output(&view, flags.format)
}

fn run(args: &PortalArgs, ctx: &AppContext) -> anyhow::Result<Portal> {
    let project = args.project.as_deref().unwrap_or(&ctx.portal_project);
    let mut state = PortalState::new(project);
    state.select_tab(parse_or_default::<PortalTab>(args.tab.as_deref(), "tab")?);
    if let Some(draft) = &args.draft {
        state.set_message_draft(draft.as_str());
    }
    if args.change_order {
        state.change_order.open();
    }
    Ok(portal::build(&ctx.store, &state, &ctx.limits)?)
}
