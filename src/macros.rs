//! Early return macros for outcomes

/// Unwrap a success or return the failure from the enclosing function
///
/// `Outcome` does not implement the unstable `Try` trait, so `?` cannot be
/// used on it directly. `try_outcome!` expands to the equivalent `match`:
///
/// - `try_outcome!(expr)` yields the success payload, or returns
///   `Failure(From::from(error))`.
/// - `try_outcome!(expr, map)` calls `map` on the error first, which is the
///   place to attach it as the cause of a higher-level error.
///
/// # Examples
///
/// ```rust
/// use fallible::{Error, Outcome, failure, success, try_outcome};
///
/// fn divide(a: i32, b: i32) -> Outcome<i32> {
///     if b == 0 {
///         return failure(Error::new("Division by zero"));
///     }
///     success(a / b)
/// }
///
/// fn complex_operation() -> Outcome<i32> {
///     let half = try_outcome!(divide(10, 2));
///     let broken = try_outcome!(divide(half, 0), |e| {
///         Error::new("Complex operation failed").with_cause(e)
///     });
///     success(broken)
/// }
///
/// let err = complex_operation().unwrap_failure();
/// assert_eq!(err.message(), "Complex operation failed");
/// assert!(err.has_cause());
/// ```
#[macro_export]
macro_rules! try_outcome {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => {
                return $crate::Outcome::Failure(::core::convert::From::from(error));
            }
        }
    };
    ($expr:expr, $map:expr $(,)?) => {
        match $crate::Outcome::map_failure($expr, $map) {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => {
                return $crate::Outcome::Failure(::core::convert::From::from(error));
            }
        }
    };
}

/// Return a failure built from a format string
///
/// `fail!("...", args)` is shorthand for
/// `return failure(Error::new(format!("...", args)).into())`.
///
/// ```rust
/// use fallible::{Outcome, fail, success};
///
/// fn parse_age(age: i64) -> Outcome<u8> {
///     if !(0..=150).contains(&age) {
///         fail!("age {age} out of range");
///     }
///     success(age as u8)
/// }
///
/// assert_eq!(parse_age(200).unwrap_failure().message(), "age 200 out of range");
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)+) => {
        return $crate::Outcome::Failure(::core::convert::From::from($crate::Error::new(
            ::std::format!($($arg)+),
        )))
    };
}
