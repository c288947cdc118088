//! Core types shared by the guards.
//!
//! - **Errors**: `GuardError` with thiserror derives and its kind enum
//! - **Config**: observability configuration for hosts

mod config;
mod errors;

pub use config::{Config, ObservabilityConfig};
pub use errors::{GuardError, GuardErrorKind, Result, NULL_MESSAGE, UNKNOWN_ARGUMENT};
