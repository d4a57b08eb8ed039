//! Success/failure container

use std::fmt::Debug;

use crate::error::{BoxError, Error};

/// The outcome of an operation that may fail
///
/// An `Outcome` holds either the value produced by an operation or the
/// reason it could not produce one. The failure type defaults to the crate
/// [`Error`], but any type can be used as the failure payload.
///
/// Outcomes are never modified in place. Every method either borrows the
/// outcome or consumes it and builds a new one.
///
/// # Examples
///
/// ```rust
/// use fallible::{Error, Outcome, failure, success};
///
/// let found: Outcome<&str> = success("User Data");
/// let missing: Outcome<&str> = failure(Error::new("Invalid user ID"));
///
/// match missing {
///     Outcome::Success(data) => println!("got {data}"),
///     Outcome::Failure(err) => assert_eq!(err.message(), "Invalid user ID"),
/// }
/// assert!(found.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Outcome` may be a `Failure` variant, which should be handled"]
pub enum Outcome<T, E = Error> {
    /// The operation produced a value
    Success(T),
    /// The operation failed with the given error
    Failure(E),
}

/// Wrap `value` in the success variant
///
/// The failure type is independent of the argument, annotate it where
/// inference cannot fill it in.
///
/// ```rust
/// use fallible::{Outcome, success};
///
/// let outcome = success::<_, String>(5);
/// assert_eq!(outcome, Outcome::Success(5));
/// ```
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Wrap `error` in the failure variant
///
/// The success type is independent of the argument, annotate it where
/// inference cannot fill it in.
///
/// ```rust
/// use fallible::{Error, Outcome, failure};
///
/// let outcome: Outcome<u32> = failure(Error::new("Division by zero"));
/// assert!(outcome.is_failure());
/// ```
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is a failure
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the success payload, if any
    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Borrow the failure payload, if any
    pub fn failure(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Convert into the success payload, discarding a failure
    pub fn into_success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Convert into the failure payload, discarding a success
    pub fn into_failure(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Convert from `&Outcome<T, E>` to `Outcome<&T, &E>`
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Consume the outcome, calling `on_success` or `on_failure` depending
    /// on the populated variant
    ///
    /// ```rust
    /// use fallible::{Error, Outcome, failure};
    ///
    /// let outcome: Outcome<i32> = failure(Error::new("Division by zero"));
    /// let text = outcome.fold(|v| v.to_string(), |e| e.to_string());
    /// assert_eq!(text, "Division by zero");
    /// ```
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Apply `f` to the success payload, leaving a failure untouched
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Apply `f` to the failure payload, leaving a success untouched
    pub fn map_failure<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Continue with `f` on success, short-circuit on failure
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recover with `f` on failure, pass a success through
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error),
        }
    }

    /// Return the success payload or `default`
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Return the success payload or compute one from the failure
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Return the success payload or `T::default()`
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Iterate over the success payload (zero or one items)
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.success().into_iter()
    }

    /// Convert into a standard library `Result`
    ///
    /// Use this at the edge of code that wants the `?` operator.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Return the success payload
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure, with the failure payload in the
    /// message.
    #[track_caller]
    pub fn unwrap_success(self) -> T
    where
        E: Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                unwrap_failed("called `Outcome::unwrap_success()` on a `Failure` value", &error)
            }
        }
    }

    /// Return the failure payload
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success, with the success payload in the
    /// message.
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: Debug,
    {
        match self {
            Outcome::Success(value) => {
                unwrap_failed("called `Outcome::unwrap_failure()` on a `Success` value", &value)
            }
            Outcome::Failure(error) => error,
        }
    }

    /// Return the success payload
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the outcome is a failure.
    #[track_caller]
    pub fn expect_success(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => unwrap_failed(msg, &error),
        }
    }

    /// Return the failure payload
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the outcome is a success.
    #[track_caller]
    pub fn expect_failure(self, msg: &str) -> E
    where
        T: Debug,
    {
        match self {
            Outcome::Success(value) => unwrap_failed(msg, &value),
            Outcome::Failure(error) => error,
        }
    }
}

impl<T, E> Outcome<T, E>
where
    E: Into<BoxError>,
{
    /// Wrap a failure as the cause of a new [`Error`] carrying `message`
    ///
    /// This is the usual way to propagate a lower-level failure while
    /// keeping the history of what caused it.
    ///
    /// ```rust
    /// use fallible::{Error, Outcome, failure};
    ///
    /// let low: Outcome<i32> = failure(Error::new("Division by zero"));
    /// let high = low.context("Complex operation failed").unwrap_failure();
    ///
    /// assert_eq!(high.message(), "Complex operation failed");
    /// assert_eq!(high.cause().unwrap().to_string(), "Division by zero");
    /// ```
    pub fn context<M>(self, message: M) -> Outcome<T, Error>
    where
        M: Into<String>,
    {
        self.map_failure(|error| Error::new(message).with_cause(error))
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Collect an iterator of outcomes, stopping at the first failure
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        let mut first_failure = None;
        let collected: V = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    first_failure = Some(error);
                    None
                }
            })
            .collect();

        match first_failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(collected),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_failed(msg: &str, payload: &dyn Debug) -> ! {
    panic!("{msg}: {payload:?}")
}
