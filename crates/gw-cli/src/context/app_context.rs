use std::path::PathBuf;

use anyhow::Context;
use gw_config::GroundworkConfig;
use gw_core::RecordStore;
use gw_view::screens::ViewLimits;

/// Where the record store came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixtureSource {
    Embedded,
    File(PathBuf),
}

impl FixtureSource {
    /// `--fixture` beats `fixture.path` from config; neither means the demo data.
    #[must_use]
    pub fn resolve(flag: Option<&str>, config: &GroundworkConfig) -> Self {
        flag.map(str::trim)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .or_else(|| config.fixture.path())
            .map_or(Self::Embedded, Self::File)
    }
}

/// Everything a command handler needs: the loaded store and the screen settings.
pub struct AppContext {
    pub store: RecordStore,
    pub limits: ViewLimits,
    pub portal_project: String,
}

impl AppContext {
    pub fn init(config: &GroundworkConfig, fixture_flag: Option<&str>) -> anyhow::Result<Self> {
        let source = FixtureSource::resolve(fixture_flag, config);
        let store = match &source {
            FixtureSource::Embedded => {
                RecordStore::demo().context("embedded demo fixture failed to load")?
            }
            FixtureSource::File(path) => RecordStore::from_path(path)
                .with_context(|| format!("failed to load fixture {}", path.display()))?,
        };
        tracing::debug!(source = ?source, "record store ready");

        Ok(Self {
            store,
            limits: limits_from(config),
            portal_project: config.portal.project_id.clone(),
        })
    }
}

#[must_use]
pub const fn limits_from(config: &GroundworkConfig) -> ViewLimits {
    ViewLimits {
        dashboard_activity: config.display.dashboard_activity_limit,
        detail_activity: config.display.detail_activity_limit,
        portal_updates: config.display.portal_update_limit,
    }
}
