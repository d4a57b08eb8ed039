//! Failure strategies for batches of outcomes
//!
//! When many operations run side by side, their outcomes eventually have to
//! be resolved into a single answer. A [`FailureStrategy`] decides how
//! failures in the batch affect that answer.
//!
//! # Examples
//!
//! ```rust
//! use fallible::{FailFast, Ignore, Outcome, failure, resolve_with, success};
//!
//! let batch = || -> Vec<Outcome<i32, &'static str>> { vec![success(1), failure("failed on 2"), success(3)] };
//!
//! assert_eq!(resolve_with::<FailFast, _, _>(batch()), failure("failed on 2"));
//! assert_eq!(resolve_with::<Ignore, _, _>(batch()), vec![1, 3]);
//! ```

use std::fmt::{self, Debug, Display};
use std::ops::Deref;

use thiserror::Error;
use tracing::warn;

use crate::result::Outcome;

/// Trait for failure handling strategies
///
/// Implementors define how a collection of outcomes is reduced. Outcomes
/// are always visited in the order they were given.
pub trait FailureStrategy<T, E> {
    /// What the batch resolves to
    type Output;

    /// Resolve the outcomes according to the strategy
    fn resolve(outcomes: Vec<Outcome<T, E>>) -> Self::Output;
}

/// Resolve `outcomes` with strategy `S`
pub fn resolve_with<S, T, E>(outcomes: Vec<Outcome<T, E>>) -> S::Output
where
    S: FailureStrategy<T, E>,
{
    S::resolve(outcomes)
}

/// Fail fast strategy
///
/// The first failure wins. With no failure, every success value is returned
/// in order.
pub struct FailFast;

impl<T, E> FailureStrategy<T, E> for FailFast {
    type Output = Outcome<Vec<T>, E>;

    fn resolve(outcomes: Vec<Outcome<T, E>>) -> Outcome<Vec<T>, E> {
        outcomes.into_iter().collect()
    }
}

/// Ignore failures strategy
///
/// Failures are dropped, only success values remain.
pub struct Ignore;

impl<T, E> FailureStrategy<T, E> for Ignore {
    type Output = Vec<T>;

    fn resolve(outcomes: Vec<Outcome<T, E>>) -> Vec<T> {
        outcomes.into_iter().filter_map(Outcome::into_success).collect()
    }
}

/// Log and ignore failures strategy
///
/// Like [`Ignore`], but every dropped failure is reported as a `WARN`
/// tracing event first.
pub struct LogAndIgnore;

impl<T, E> FailureStrategy<T, E> for LogAndIgnore
where
    E: Debug,
{
    type Output = Vec<T>;

    fn resolve(outcomes: Vec<Outcome<T, E>>) -> Vec<T> {
        outcomes
            .into_iter()
            .enumerate()
            .filter_map(|(index, outcome)| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(err) => {
                    warn!(target: "fallible::handlers", index, error = ?err, "failure ignored");
                    None
                }
            })
            .collect()
    }
}

/// Aggregate failures strategy
///
/// Succeeds only if every outcome succeeded. Otherwise all failures are
/// returned together, in order, as an [`AggregateError`].
pub struct Aggregate;

impl<T, E> FailureStrategy<T, E> for Aggregate {
    type Output = Outcome<Vec<T>, AggregateError<E>>;

    fn resolve(outcomes: Vec<Outcome<T, E>>) -> Outcome<Vec<T>, AggregateError<E>> {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for outcome in outcomes {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(err) => errors.push(err),
            }
        }

        if errors.is_empty() {
            Outcome::Success(values)
        } else {
            Outcome::Failure(AggregateError(errors))
        }
    }
}

/// The failures collected by [`Aggregate`], in batch order
///
/// Displays one failure per line, each prefixed with `- `. Derefs to the
/// underlying `Vec` so the failures can be counted and inspected directly.
#[derive(Error, Debug, PartialEq)]
pub struct AggregateError<E>(pub Vec<E>);

impl<E> AggregateError<E> {
    /// Take the failures out
    pub fn into_inner(self) -> Vec<E> {
        self.0
    }
}

impl<E> Display for AggregateError<E>
where
    E: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, err) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "- {err}")?;
        }
        Ok(())
    }
}

impl<E> Deref for AggregateError<E> {
    type Target = Vec<E>;

    fn deref(&self) -> &Vec<E> {
        &self.0
    }
}
