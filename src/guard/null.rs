//! Presence and emptiness guards.

use std::fmt::Display;

use super::{reject, GuardError, Result};

/// Fail with [`GuardError::NullArgument`] when `value` is `None`.
pub fn throw_if_null<T>(value: Option<T>, name: &str) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => Err(reject(GuardError::null_argument(name))),
    }
}

/// Fail when the text is absent or empty.
///
/// Returns the value as given, not a copy.
pub fn throw_if_null_or_empty<S>(value: Option<S>, name: &str) -> Result<S>
where
    S: AsRef<str>,
{
    let value = throw_if_null(value, name)?;
    if value.as_ref().is_empty() {
        return Err(reject(GuardError::empty_argument(name)));
    }
    Ok(value)
}

/// Like [`throw_if_null_or_empty`], but emptiness is decided on the value's
/// `Display` rendering. Suits builders and wrappers that only render to text.
pub fn throw_if_null_or_empty_rendered<S>(value: Option<S>, name: &str) -> Result<S>
where
    S: Display,
{
    use std::fmt::Write;

    let value = throw_if_null(value, name)?;
    let mut probe = NonEmptyProbe::default();
    // A Display impl that errors still counts as rendering nothing.
    let _ = write!(probe, "{}", value);
    if !probe.seen {
        return Err(reject(GuardError::empty_argument(name)));
    }
    Ok(value)
}

/// Records whether any text was written without buffering it.
#[derive(Debug, Default)]
struct NonEmptyProbe {
    seen: bool,
}

impl std::fmt::Write for NonEmptyProbe {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.seen |= !s.is_empty();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GuardErrorKind;
    use pretty_assertions::assert_eq;
    use std::borrow::Cow;
    use tracing_test::traced_test;

    #[derive(Debug)]
    struct Rendered(&'static str);

    impl Display for Rendered {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }

    #[test]
    fn test_null_returns_value() {
        assert_eq!(throw_if_null(Some(42), "x").unwrap(), 42);
        let v = vec![1, 2, 3];
        assert_eq!(throw_if_null(Some(&v), "v").unwrap(), &v);
    }

    #[test]
    fn test_null_rejects_none() {
        let err = throw_if_null::<u8>(None, "x").unwrap_err();
        assert_eq!(err.kind(), GuardErrorKind::NullArgument);
        assert_eq!(err.param_name(), Some("x"));
    }

    #[test]
    fn test_null_or_empty() {
        assert_eq!(throw_if_null_or_empty(Some("ok"), "x").unwrap(), "ok");

        let empty = throw_if_null_or_empty(Some(""), "x").unwrap_err();
        assert_eq!(empty.kind(), GuardErrorKind::EmptyArgument);
        assert_eq!(empty.message(), "The argument x is empty.");

        let none = throw_if_null_or_empty::<String>(None, "x").unwrap_err();
        assert_eq!(none.kind(), GuardErrorKind::NullArgument);
    }

    #[test]
    fn test_null_or_empty_accepts_owned_and_cow() {
        let owned = throw_if_null_or_empty(Some(String::from("name")), "n").unwrap();
        assert_eq!(owned, "name");

        let cow: Cow<'_, str> = Cow::Borrowed("");
        assert!(throw_if_null_or_empty(Some(cow), "n").is_err());
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        assert_eq!(throw_if_null_or_empty(Some(" "), "x").unwrap(), " ");
    }

    #[test]
    fn test_rendered_emptiness() {
        assert_eq!(throw_if_null_or_empty_rendered(Some(Rendered("a")), "b").unwrap().0, "a");

        let err = throw_if_null_or_empty_rendered(Some(Rendered("")), "b").unwrap_err();
        assert_eq!(err.kind(), GuardErrorKind::EmptyArgument);
        assert_eq!(err.message(), "The argument b is empty.");

        let none = throw_if_null_or_empty_rendered::<Rendered>(None, "b").unwrap_err();
        assert_eq!(none.kind(), GuardErrorKind::NullArgument);
    }

    #[test]
    fn test_rendered_numbers_are_never_empty() {
        assert_eq!(throw_if_null_or_empty_rendered(Some(0), "n").unwrap(), 0);
    }

    #[traced_test]
    #[test]
    fn test_rejection_is_traced() {
        let _ = throw_if_null::<u8>(None, "traced_param");
        assert!(logs_contain("argument_rejected"));
        assert!(logs_contain("traced_param"));
        assert!(logs_contain("null_argument"));
    }
}
