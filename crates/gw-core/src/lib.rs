//! # gw-core
//!
//! Core types and the fixture record store for Groundwork.
//!
//! This crate provides the foundational types shared across all Groundwork crates:
//! - Entity structs for every record in the dataset (projects, budgets, tasks, files, etc.)
//! - Status enums with their storage strings
//! - Cross-cutting error types
//! - The read-only [`store::RecordStore`] and its embedded demo fixture

pub mod entities;
pub mod enums;
pub mod errors;
pub mod store;

pub use errors::CoreError;
pub use store::RecordStore;
