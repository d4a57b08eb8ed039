//! Conversion traits between outcomes and the standard library types

use crate::result::Outcome;

/// Trait to convert result-like values into an [`Outcome`]
///
/// This trait provides a uniform interface over the standard `Result` and
/// `Outcome` itself, so generic code can accept either.
///
/// ```rust
/// use fallible::{IntoOutcome, Outcome};
///
/// let outcome: Outcome<u8, String> = Ok::<u8, String>(1).into_outcome();
/// assert!(outcome.is_success());
/// ```
pub trait IntoOutcome<T, E> {
    /// Convert into an outcome
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}

/// Extension methods turning an `Option` into an [`Outcome`]
pub trait OptionExt<T> {
    /// `Some(v)` becomes `Success(v)`, `None` becomes `Failure(error)`
    fn ok_or_failure<E>(self, error: E) -> Outcome<T, E>;

    /// Like [`OptionExt::ok_or_failure`], building the error only when needed
    fn ok_or_else_failure<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_failure<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(error),
        }
    }

    fn ok_or_else_failure<E, F>(self, f: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(f()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, failure, success};

    fn describe<O: IntoOutcome<u32, String>>(input: O) -> String {
        input.into_outcome().fold(|v| format!("value {v}"), |e| format!("error {e}"))
    }

    #[test]
    fn test_generic_code_accepts_both_kinds() {
        assert_eq!(describe(Ok::<u32, String>(3)), "value 3");
        assert_eq!(describe(Err::<u32, String>("bad".to_string())), "error bad");
        assert_eq!(describe(success::<u32, String>(4)), "value 4");
        assert_eq!(describe(failure::<u32, String>("worse".to_string())), "error worse");
    }

    #[test]
    fn test_option_into_outcome() {
        let users = ["ada", "grace"];

        let found: Outcome<&&str> = users.first().ok_or_failure(Error::new("no users"));
        assert_eq!(found.unwrap_success(), &"ada");

        let missing: Outcome<&&str> = users.get(5).ok_or_else_failure(|| Error::new("Invalid user ID"));
        assert_eq!(missing.unwrap_failure().message(), "Invalid user ID");
    }
}
