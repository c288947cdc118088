//! Fluent argument guards.
//!
//! Every guard hands its input back on success so checks chain inline with
//! `?` at the top of a function body:
//!
//! ```
//! use arg_guard::guard::{throw_if, throw_if_null_or_empty, throw_out_of_range_if_outside_ord};
//!
//! fn connect(host: Option<&str>, port: u16, retries: u32) -> arg_guard::Result<String> {
//!     let host = throw_if_null_or_empty(host, "host")?;
//!     let port = throw_out_of_range_if_outside_ord(Some(port), "port", &1, &65535)?;
//!     let retries = throw_if(retries, |r| *r > 10, Some("retries"), None)?;
//!     Ok(format!("{host}:{port} x{retries}"))
//! }
//!
//! assert_eq!(connect(Some("db"), 5432, 3).unwrap(), "db:5432 x3");
//! assert!(connect(Some(""), 5432, 3).is_err());
//! ```
//!
//! Absent values, predicates and message producers are modelled as `None`.

mod condition;
mod ext;
mod null;
mod range;

pub use condition::{throw_if, throw_if_condition, throw_if_condition_with, throw_if_with};
pub use ext::{GuardExt, OptionGuardExt};
pub use null::{throw_if_null, throw_if_null_or_empty, throw_if_null_or_empty_rendered};
pub use range::{
    throw_out_of_range_if, throw_out_of_range_if_outside, throw_out_of_range_if_outside_ord,
};

pub use crate::types::{GuardError, GuardErrorKind, Result};

use crate::observability::GUARD_TARGET;

/// Parameter name reported when a message producer is absent.
pub const MESSAGE_PRODUCER_PARAM: &str = "messageProducer";

/// Parameter name reported when a range predicate is absent.
pub const PREDICATE_PARAM: &str = "predicate";

/// Record a rejection and hand the error back for returning.
fn reject(err: GuardError) -> GuardError {
    tracing::debug!(
        target: GUARD_TARGET,
        kind = %err.kind(),
        param = err.param_name().unwrap_or(crate::types::UNKNOWN_ARGUMENT),
        "argument_rejected: {}",
        err.message()
    );
    err
}

/// Render a value for an error message. A failing `Display` keeps whatever
/// it wrote before the error instead of panicking.
fn render<T: std::fmt::Display>(value: &T) -> String {
    use std::fmt::Write;

    let mut rendered = String::new();
    let _ = write!(rendered, "{}", value);
    rendered
}
