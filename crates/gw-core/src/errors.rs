//! Cross-cutting error types for Groundwork.
//!
//! Formatting and view errors live in `gw-view`, configuration errors in
//! `gw-config`. Everything converges into `anyhow` inside `gw-cli`.

use thiserror::Error;

/// Errors raised while loading or querying the record store.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Fixture data violated a structural invariant.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Fixture text was not valid JSON for the store layout.
    #[error("Fixture parse error: {0}")]
    Fixture(#[from] serde_json::Error),

    /// Fixture file could not be read.
    #[error("Fixture read error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CoreError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    /// Whether this error is an unknown-id lookup rather than a data fault.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
