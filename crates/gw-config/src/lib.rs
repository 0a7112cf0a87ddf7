//! # gw-config
//!
//! Layered configuration loading for Groundwork using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GROUNDWORK_*` prefix, `__` as separator)
//! 2. Project-level `.groundwork/config.toml`
//! 3. User-level `~/.config/groundwork/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GROUNDWORK_FIXTURE__PATH` -> `fixture.path`,
//! `GROUNDWORK_DISPLAY__DASHBOARD_ACTIVITY_LIMIT` -> `display.dashboard_activity_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use gw_config::GroundworkConfig;
//!
//! let config = GroundworkConfig::load_with_dotenv().expect("config");
//! if let Some(path) = config.fixture.path() {
//!     println!("fixture: {}", path.display());
//! }
//! ```

mod display;
mod error;
mod fixture;
mod portal;

pub use display::DisplayConfig;
pub use error::ConfigError;
pub use fixture::FixtureConfig;
pub use portal::PortalConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "GROUNDWORK_";

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".groundwork/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct GroundworkConfig {
    #[serde(default)]
    pub fixture: FixtureConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub portal: PortalConfig,
}

impl GroundworkConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading a `.env` file, if one exists.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// Tests and the CLI use this to stack extra providers on top.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate()?;
        self.portal.validate()
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("groundwork").join("config.toml"))
    }

    /// Silently does nothing if no `.env` is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
