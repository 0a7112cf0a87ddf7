//! View derivation error types.

use gw_core::CoreError;
use thiserror::Error;

/// Errors from display formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Input was not a parseable calendar date.
    #[error("Invalid Date: '{0}'")]
    InvalidDate(String),
}

/// Errors from building a screen view-model.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Store lookup failed (unknown project or archived record id).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A record carried a value that could not be formatted.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl ViewError {
    /// Whether the screen should render its "not found" state.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(err) if err.is_not_found())
    }
}
