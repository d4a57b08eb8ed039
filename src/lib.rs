//! A success/failure outcome type for Rust
//!
//! This crate provides [`Outcome`], a tagged union holding either a success
//! value or a failure value, together with the [`success`] and [`failure`]
//! constructors. Failures are always returned as ordinary values, never
//! raised; callers branch on the discriminant and decide whether to recover
//! or to propagate, optionally chaining the prior error as the cause of a
//! new one.
//!
//! ```rust
//! use fallible::{Error, Outcome, failure, success};
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32> {
//!     if b == 0 {
//!         return failure(Error::new("Division by zero"));
//!     }
//!     success(a / b)
//! }
//!
//! assert_eq!(divide(10, 2).unwrap_success(), 5);
//! assert_eq!(divide(10, 0).unwrap_failure().message(), "Division by zero");
//! ```
//!
//! Around the core container the crate ships a few optional pieces:
//!
//! - [`attempt`] and `attempt_async` convert `Err` returns and panics of
//!   risky calls into failures at an explicit boundary.
//! - [`handlers`] resolves a batch of outcomes with a [`FailureStrategy`].
//! - [`try_outcome!`] and [`fail!`] implement early return for outcomes.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core modules
mod result;
mod error;
mod boundary;
pub mod traits;
pub mod handlers;
mod macros;

#[cfg(test)]
mod testing;

// Re-export public API
pub use result::{Outcome, success, failure};
pub use error::{BoxError, Chain, Error};
pub use boundary::attempt;
pub use traits::{IntoOutcome, OptionExt};
pub use handlers::{
    AggregateError, FailureStrategy, FailFast, Ignore, LogAndIgnore, Aggregate, resolve_with,
};

#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub use boundary::attempt_async;

// Re-export the proc macros
#[cfg(feature = "macros")]
#[cfg_attr(docsrs, doc(cfg(feature = "macros")))]
pub use fallible_macros::boundary;
