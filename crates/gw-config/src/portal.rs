//! Client portal settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_project_id() -> String {
    "ventura".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PortalConfig {
    /// Project the portal opens on when none is given.
    #[serde(default = "default_project_id")]
    pub project_id: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
        }
    }
}

impl PortalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_id.trim().is_empty() {
            return Err(ConfigError::invalid("portal.project_id", "must not be empty"));
        }
        Ok(())
    }
}
