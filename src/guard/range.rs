//! Range guards.
//!
//! Bounds are inclusive: a value equal to `min` or `max` passes.

use std::cmp::Ordering;
use std::fmt::Display;

use super::{reject, render, throw_if_null, GuardError, Result, PREDICATE_PARAM};
use crate::types::UNKNOWN_ARGUMENT;

/// Fail with [`GuardError::OutOfRange`] when `predicate(&value)` holds.
///
/// An absent predicate is a [`GuardError::NullArgument`] whatever the value.
pub fn throw_out_of_range_if<T, F>(
    value: T,
    predicate: Option<F>,
    name: Option<&str>,
    message: Option<&str>,
) -> Result<T>
where
    T: Display,
    F: FnOnce(&T) -> bool,
{
    let predicate = throw_if_null(predicate, PREDICATE_PARAM)?;
    if !predicate(&value) {
        return Ok(value);
    }
    Err(out_of_range(name, &value, message))
}

/// Fail unless `min <= value <= max`, comparing against bounds of another type.
///
/// A value that does not compare with a bound at all (`NaN`) is out of range.
pub fn throw_out_of_range_if_outside<T, B>(
    value: Option<T>,
    name: &str,
    min: B,
    max: B,
) -> Result<T>
where
    T: PartialOrd<B> + Display,
{
    let value = throw_if_null(value, name)?;
    let below = !matches!(
        value.partial_cmp(&min),
        Some(Ordering::Equal | Ordering::Greater)
    );
    let above = !matches!(
        value.partial_cmp(&max),
        Some(Ordering::Less | Ordering::Equal)
    );
    if below || above {
        return Err(out_of_range(Some(name), &value, None));
    }
    Ok(value)
}

/// Fail unless `min <= value <= max` under the type's total order.
pub fn throw_out_of_range_if_outside_ord<T>(
    value: Option<T>,
    name: &str,
    min: &T,
    max: &T,
) -> Result<T>
where
    T: Ord + Display,
{
    let value = throw_if_null(value, name)?;
    if value.cmp(min) == Ordering::Less || value.cmp(max) == Ordering::Greater {
        return Err(out_of_range(Some(name), &value, None));
    }
    Ok(value)
}

fn out_of_range<T: Display>(name: Option<&str>, value: &T, message: Option<&str>) -> GuardError {
    let rendered = render(value);
    let message = match message {
        Some(message) => message.to_owned(),
        None => format!(
            "{} of \"{}\" is outside of the expected range.",
            name.unwrap_or(UNKNOWN_ARGUMENT),
            rendered
        ),
    };
    reject(GuardError::out_of_range(name, Some(rendered), message))
}
