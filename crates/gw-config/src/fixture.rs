//! Fixture source selection.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct FixtureConfig {
    /// JSON fixture to load instead of the embedded demo dataset.
    #[serde(default)]
    pub path: String,
}

impl FixtureConfig {
    /// `None` means the embedded demo dataset.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_path_means_embedded() {
        assert_eq!(FixtureConfig::default().path(), None);
        let blank = FixtureConfig {
            path: "   ".to_string(),
        };
        assert_eq!(blank.path(), None);
    }

    #[test]
    fn path_is_trimmed() {
        let config = FixtureConfig {
            path: " data/site.json ".to_string(),
        };
        assert_eq!(config.path(), Some(PathBuf::from("data/site.json")));
    }
}
