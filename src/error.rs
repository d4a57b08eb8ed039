//! Default failure payload

use std::error::Error as StdError;

/// A boxed error that can cross threads
///
/// This is what [`Error`] keeps as its cause, and what the boundary adapters
/// accept as the error of a risky call.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The default failure type of an [`Outcome`](crate::Outcome)
///
/// An `Error` carries a human readable message and, optionally, the error
/// that caused it. Attaching causes builds a linked history that callers can
/// walk with [`Error::chain`].
///
/// The `Display` output is the message alone; the cause is reachable through
/// [`std::error::Error::source`].
///
/// # Examples
///
/// ```rust
/// use fallible::Error;
///
/// let low = Error::new("Division by zero");
/// let high = Error::new("Complex operation failed").with_cause(low);
///
/// let messages: Vec<String> = high.chain().map(|e| e.to_string()).collect();
/// assert_eq!(messages, vec!["Complex operation failed", "Division by zero"]);
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    message: String,
    #[source]
    cause: Option<BoxError>,
}

impl Error {
    /// Create an error with the given message and no cause
    pub fn new<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Attach `cause` as the error that led to this one
    ///
    /// Anything that converts into a boxed error is accepted: concrete
    /// errors, `Box<dyn Error + Send + Sync>`, `&str` and `String`.
    /// Replaces any cause set before.
    pub fn with_cause<C>(mut self, cause: C) -> Self
    where
        C: Into<BoxError>,
    {
        self.cause = Some(cause.into());
        self
    }

    /// Convert any error into an `Error`
    ///
    /// An `Error` is returned as is, also when it arrives boxed. Any other
    /// error becomes the cause of a new `Error` whose message is the
    /// `Display` output of the original.
    ///
    /// ```rust
    /// use std::error::Error as StdError;
    /// use fallible::Error;
    ///
    /// let boxed: Box<dyn StdError + Send + Sync> = "connection reset".into();
    /// assert_eq!(Error::wrap(boxed).message(), "connection reset");
    /// ```
    pub fn wrap<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        let boxed: BoxError = error.into();
        match boxed.downcast::<Error>() {
            Ok(error) => *error,
            Err(other) => Self {
                message: other.to_string(),
                cause: Some(other),
            },
        }
    }

    /// The message of this error, without its causes
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error that caused this one, if any
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns `true` if a cause is attached
    pub fn has_cause(&self) -> bool {
        self.cause.is_some()
    }

    /// Borrow the direct cause as a concrete type
    ///
    /// Returns `None` if there is no cause or it is of a different type.
    pub fn downcast_cause_ref<C>(&self) -> Option<&C>
    where
        C: StdError + 'static,
    {
        self.cause.as_deref()?.downcast_ref::<C>()
    }

    /// Iterate over this error and every error in its source chain
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// The last error of the source chain
    ///
    /// This is the error itself when no cause is attached.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        self.chain().last().unwrap_or(self)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Iterator over an error and its sources, see [`Error::chain`]
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum StorageError {
        #[error("record {0} not found")]
        NotFound(u32),
    }

    #[test]
    fn test_new_error_has_no_cause() {
        let err = Error::new("Division by zero");

        assert_eq!(err.message(), "Division by zero");
        assert_eq!(err.to_string(), "Division by zero");
        assert!(!err.has_cause());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_cause_is_exposed_as_source() {
        let err = Error::new("Complex operation failed").with_cause(Error::new("Division by zero"));

        assert_eq!(err.to_string(), "Complex operation failed");
        assert!(err.has_cause());
        assert_eq!(err.source().map(|e| e.to_string()), Some("Division by zero".to_string()));
    }

    #[test]
    fn test_chain_walks_all_causes() {
        let err = Error::new("request failed")
            .with_cause(Error::new("query failed").with_cause(StorageError::NotFound(7)));

        let messages: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert_eq!(messages, vec!["request failed", "query failed", "record 7 not found"]);
        assert_eq!(err.root_cause().to_string(), "record 7 not found");
    }

    #[test]
    fn test_root_cause_without_cause_is_self() {
        let err = Error::new("alone");
        assert_eq!(err.root_cause().to_string(), "alone");
    }

    #[test]
    fn test_downcast_cause_preserves_subtype() {
        let err = Error::new("lookup failed").with_cause(StorageError::NotFound(3));

        assert_eq!(err.downcast_cause_ref::<StorageError>(), Some(&StorageError::NotFound(3)));
        assert!(err.downcast_cause_ref::<std::io::Error>().is_none());
    }

    #[test]
    fn test_wrap_keeps_foreign_error_as_cause() {
        let err = Error::wrap(StorageError::NotFound(9));

        assert_eq!(err.message(), "record 9 not found");
        assert_eq!(err.downcast_cause_ref::<StorageError>(), Some(&StorageError::NotFound(9)));
    }

    #[test]
    fn test_wrap_does_not_double_wrap() {
        let err = Error::wrap(Error::new("already wrapped").with_cause(StorageError::NotFound(1)));

        assert_eq!(err.message(), "already wrapped");
        assert_eq!(err.chain().count(), 2);
    }

    #[test]
    fn test_wrap_accepts_boxed_errors() {
        let boxed: BoxError = Box::new(StorageError::NotFound(4));
        let err = Error::wrap(boxed);

        assert_eq!(err.message(), "record 4 not found");
        assert_eq!(err.downcast_cause_ref::<StorageError>(), Some(&StorageError::NotFound(4)));
    }

    #[test]
    fn test_wrap_unboxes_crate_error() {
        let boxed: BoxError = Box::new(Error::new("inner"));
        let err = Error::wrap(boxed);

        assert_eq!(err.message(), "inner");
        assert!(!err.has_cause());
    }

    #[test]
    fn test_wrap_accepts_plain_strings() {
        assert_eq!(Error::wrap("timed out").message(), "timed out");
        assert_eq!(Error::wrap(String::from("refused")).message(), "refused");
    }

    #[test]
    fn test_with_cause_accepts_boxed_error() {
        let boxed: BoxError = Box::new(StorageError::NotFound(2));
        let err = Error::new("load failed").with_cause(boxed);

        assert_eq!(err.downcast_cause_ref::<StorageError>(), Some(&StorageError::NotFound(2)));
        assert_eq!(err.root_cause().to_string(), "record 2 not found");
    }

    #[test]
    fn test_from_strings() {
        assert_eq!(Error::from("a").message(), "a");
        assert_eq!(Error::from(String::from("b")).message(), "b");
    }
}
