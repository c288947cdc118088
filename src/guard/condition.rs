//! Predicate and boolean-condition guards.
//!
//! The predicate forms evaluate the predicate once and delegate to the
//! boolean forms. Messages are built only when the guard fails.

use std::fmt::Display;

use super::{reject, render, throw_if_null, GuardError, Result, MESSAGE_PRODUCER_PARAM};
use crate::types::UNKNOWN_ARGUMENT;

/// Fail with [`GuardError::InvalidArgument`] when `predicate(&value)` holds.
///
/// Without a `message` the error reads `{name} of "{value}" is invalid.`.
pub fn throw_if<T, F>(
    value: T,
    predicate: F,
    name: Option<&str>,
    message: Option<&str>,
) -> Result<T>
where
    T: Display,
    F: FnOnce(&T) -> bool,
{
    let condition = predicate(&value);
    throw_if_condition(value, condition, name, message)
}

/// Fail with [`GuardError::InvalidArgument`] when `condition` is true.
pub fn throw_if_condition<T>(
    value: T,
    condition: bool,
    name: Option<&str>,
    message: Option<&str>,
) -> Result<T>
where
    T: Display,
{
    if !condition {
        return Ok(value);
    }
    let rendered = render(&value);
    let message = match message {
        Some(message) => message.to_owned(),
        None => invalid_message(name, &rendered),
    };
    Err(reject(GuardError::invalid_argument(name, Some(rendered), message)))
}

/// Like [`throw_if`], with the message produced from the argument name.
///
/// An absent `producer` is itself a [`GuardError::NullArgument`], reported
/// before the predicate runs.
pub fn throw_if_with<T, F, P>(value: T, predicate: F, name: &str, producer: Option<P>) -> Result<T>
where
    T: Display,
    F: FnOnce(&T) -> bool,
    P: FnOnce(&str) -> String,
{
    let producer = throw_if_null(producer, MESSAGE_PRODUCER_PARAM)?;
    let condition = predicate(&value);
    fail_with_produced(value, condition, name, producer)
}

/// Like [`throw_if_condition`], with the message produced from the argument
/// name. The producer only runs when `condition` is true.
pub fn throw_if_condition_with<T, P>(
    value: T,
    condition: bool,
    name: &str,
    producer: Option<P>,
) -> Result<T>
where
    T: Display,
    P: FnOnce(&str) -> String,
{
    let producer = throw_if_null(producer, MESSAGE_PRODUCER_PARAM)?;
    fail_with_produced(value, condition, name, producer)
}

fn fail_with_produced<T, P>(value: T, condition: bool, name: &str, producer: P) -> Result<T>
where
    T: Display,
    P: FnOnce(&str) -> String,
{
    if !condition {
        return Ok(value);
    }
    let message = producer(name);
    throw_if_condition(value, true, Some(name), Some(&message))
}

fn invalid_message(name: Option<&str>, value: &str) -> String {
    format!(
        "{} of \"{}\" is invalid.",
        name.unwrap_or(UNKNOWN_ARGUMENT),
        value
    )
}
