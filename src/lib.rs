//! # arg-guard - Fluent Argument Guards
//!
//! Small checks for the top of a function body. Each guard inspects a value
//! and either hands it straight back or returns a [`GuardError`] describing
//! what was wrong with it:
//! - Presence and emptiness (`throw_if_null`, `throw_if_null_or_empty`)
//! - Caller-defined conditions (`throw_if` and its boolean/producer forms)
//! - Inclusive ranges (`throw_out_of_range_if_outside`, `throw_out_of_range_if`)
//!
//! Rejections are reported through `tracing` at debug level; see
//! [`observability`] for a ready-made subscriber.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod guard;
pub mod types;

// Internal utilities
pub mod observability;

pub use guard::{GuardExt, OptionGuardExt};
pub use types::{Config, GuardError, GuardErrorKind, Result};
