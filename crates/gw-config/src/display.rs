//! How much of each feed the screens show.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_dashboard_activity_limit() -> usize {
    8
}

const fn default_detail_activity_limit() -> usize {
    5
}

const fn default_portal_update_limit() -> usize {
    8
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Activity entries on the dashboard feed.
    #[serde(default = "default_dashboard_activity_limit")]
    pub dashboard_activity_limit: usize,

    /// Activity entries on the project overview tab.
    #[serde(default = "default_detail_activity_limit")]
    pub detail_activity_limit: usize,

    /// Entries on the portal updates tab.
    #[serde(default = "default_portal_update_limit")]
    pub portal_update_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dashboard_activity_limit: default_dashboard_activity_limit(),
            detail_activity_limit: default_detail_activity_limit(),
            portal_update_limit: default_portal_update_limit(),
        }
    }
}

impl DisplayConfig {
    /// Every limit must be at least 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("display.dashboard_activity_limit", self.dashboard_activity_limit),
            ("display.detail_activity_limit", self.detail_activity_limit),
            ("display.portal_update_limit", self.portal_update_limit),
        ];
        for (field, value) in limits {
            if value == 0 {
                return Err(ConfigError::invalid(field, "must be at least 1"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DisplayConfig::default();
        assert_eq!(config.dashboard_activity_limit, 8);
        assert_eq!(config.detail_activity_limit, 5);
        assert_eq!(config.portal_update_limit, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let config = DisplayConfig {
            detail_activity_limit: 0,
            ..DisplayConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'display.detail_activity_limit': must be at least 1"
        );
    }
}
