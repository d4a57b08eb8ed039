//! Boundary adapters
//!
//! Code that returns `Result` or may panic can be called through [`attempt`]
//! (or `attempt_async` for futures) to receive an [`Outcome`] instead. Both
//! errors and panics come back as a `Failure` holding an [`Error`], so the
//! caller only ever has to branch on the discriminant.
//!
//! The adapters are opt-in. Nothing in the container itself catches panics.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::error::{BoxError, Error};
use crate::result::Outcome;

/// Run a fallible closure, converting its error or panic into a failure
///
/// - `Ok(value)` becomes `Success(value)`.
/// - `Err(e)` becomes `Failure(Error::wrap(e))`, so `e` stays reachable as
///   the cause (or is passed through unchanged if it already is an
///   [`Error`]). Any error that converts into
///   `Box<dyn Error + Send + Sync>` is accepted, boxed errors and strings
///   included.
/// - A panic becomes `Failure` with the message `panicked: <payload>`.
///
/// The process panic hook still runs before the panic is intercepted.
///
/// # Examples
///
/// ```rust
/// use fallible::attempt;
///
/// let parsed = attempt(|| "42".parse::<i32>());
/// assert_eq!(parsed.unwrap_success(), 42);
///
/// let parsed = attempt(|| "forty-two".parse::<i32>());
/// assert_eq!(parsed.unwrap_failure().message(), "invalid digit found in string");
/// ```
pub fn attempt<T, E, F>(f: F) -> Outcome<T, Error>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => from_result(result),
        Err(payload) => from_panic(payload),
    }
}

/// Await a fallible future, converting its error or panic into a failure
///
/// The conversions are the same as for [`attempt`]. The failure is the
/// awaited value; it is never raised at the await point.
///
/// # Examples
///
/// ```rust
/// use fallible::attempt_async;
///
/// async fn fetch_user(id: u32) -> Result<&'static str, std::io::Error> {
///     if id == 0 {
///         return Err(std::io::Error::other("Invalid user ID"));
///     }
///     Ok("User Data")
/// }
///
/// let outcome = tokio_test::block_on(attempt_async(fetch_user(0)));
/// assert_eq!(outcome.unwrap_failure().message(), "Invalid user ID");
/// ```
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub async fn attempt_async<T, E, Fut>(future: Fut) -> Outcome<T, Error>
where
    Fut: std::future::Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    use futures::FutureExt;

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => from_result(result),
        Err(payload) => from_panic(payload),
    }
}

fn from_result<T, E>(result: Result<T, E>) -> Outcome<T, Error>
where
    E: Into<BoxError>,
{
    match result {
        Ok(value) => Outcome::Success(value),
        Err(err) => {
            let err = Error::wrap(err);
            debug!(target: "fallible::boundary", error = %err, "converted error into failure");
            Outcome::Failure(err)
        }
    }
}

fn from_panic<T>(payload: Box<dyn Any + Send>) -> Outcome<T, Error> {
    let message = if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {msg}")
    } else {
        "panicked".to_string()
    };

    warn!(target: "fallible::boundary", %message, "converted panic into failure");
    Outcome::Failure(Error::new(message))
}
