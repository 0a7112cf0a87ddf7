use gw_view::screens::dashboard;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `gw dashboard`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = dashboard::build(&ctx.store, &ctx.limits);
    output(&view, flags.format)
}

#[cfg(test)]
mod tests {
    use gw_view::screens::{ViewLimits, dashboard};

    use crate::commands::test_support::demo_context;

    #[test]
    fn activity_feed_follows_configured_limit() {
        let mut ctx = demo_context();
        ctx.limits = ViewLimits {
            dashboard_activity: 3,
            ..ViewLimits::default()
        };
        let view = dashboard::build(&ctx.store, &ctx.limits);
        assert_eq!(view.recent_activity.len(), 3);
        assert_eq!(view.active_projects, 4);
    }
}
