//! Method-call forms of the guards.
//!
//! ```
//! use arg_guard::guard::{GuardExt, OptionGuardExt};
//!
//! fn resize(width: Option<u32>, label: Option<String>) -> arg_guard::Result<(u32, String)> {
//!     let width = width
//!         .throw_if_null("width")?
//!         .throw_out_of_range_if_outside("width", 1, 4096)?;
//!     let label = label.throw_if_null_or_empty("label")?;
//!     Ok((width, label))
//! }
//!
//! assert!(resize(Some(800), Some("hero".into())).is_ok());
//! assert!(resize(Some(0), Some("hero".into())).is_err());
//! ```

use std::fmt::Display;

use super::Result;

/// Guards callable on any value, each delegating to the free function of the same name.
pub trait GuardExt: Sized {
    fn throw_if<F>(self, predicate: F, name: Option<&str>, message: Option<&str>) -> Result<Self>
    where
        Self: Display,
        F: FnOnce(&Self) -> bool,
    {
        super::throw_if(self, predicate, name, message)
    }

    fn throw_if_with<F, P>(self, predicate: F, name: &str, producer: Option<P>) -> Result<Self>
    where
        Self: Display,
        F: FnOnce(&Self) -> bool,
        P: FnOnce(&str) -> String,
    {
        super::throw_if_with(self, predicate, name, producer)
    }

    fn throw_out_of_range_if<F>(
        self,
        predicate: Option<F>,
        name: Option<&str>,
        message: Option<&str>,
    ) -> Result<Self>
    where
        Self: Display,
        F: FnOnce(&Self) -> bool,
    {
        super::throw_out_of_range_if(self, predicate, name, message)
    }

    fn throw_out_of_range_if_outside<B>(self, name: &str, min: B, max: B) -> Result<Self>
    where
        Self: PartialOrd<B> + Display,
    {
        super::throw_out_of_range_if_outside(Some(self), name, min, max)
    }
}

impl<T> GuardExt for T {}

/// Presence guards callable on an `Option`.
pub trait OptionGuardExt<T> {
    fn throw_if_null(self, name: &str) -> Result<T>;

    fn throw_if_null_or_empty(self, name: &str) -> Result<T>
    where
        T: AsRef<str>;
}

impl<T> OptionGuardExt<T> for Option<T> {
    fn throw_if_null(self, name: &str) -> Result<T> {
        super::throw_if_null(self, name)
    }

    fn throw_if_null_or_empty(self, name: &str) -> Result<T>
    where
        T: AsRef<str>,
    {
        super::throw_if_null_or_empty(self, name)
    }
}
