//! # gw-view
//!
//! Pure derivations from the [`gw_core::RecordStore`] to the view state each
//! Groundwork screen renders.
//!
//! - [`format`]: currency and date display strings
//! - [`filter`]: status filter and free-text project search
//! - [`aggregate`]: budget roll-ups, variance, status tallies
//! - [`group`]: task board columns and file categories
//! - [`label`]: status badges and tones
//! - [`state`]: selection, tab, and dialog state machines
//! - [`screens`]: assembled view-models for the dashboard, project list,
//!   project detail, analytics, and client portal
//!
//! Every function here is synchronous and side-effect free apart from
//! `tracing` events; identical inputs always produce identical output.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod format;
pub mod group;
pub mod label;
pub mod screens;
pub mod state;

pub use error::{FormatError, ViewError};
