//! Core domain types and logic for Cumulus.
//!
//! This crate holds everything the other crates agree on: the file/usage
//! models, the listing query builder, the usage aggregator, the unified
//! `AppError` taxonomy, and environment-driven configuration. It has no
//! I/O of its own; the backend collaborators live in `cumulus-store`.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod query;
pub mod usage;

pub use config::{BackendKind, Config};
pub use error::{AppError, ErrorMetadata, LogLevel};
