//! Assertion failure types.
//!
//! This module provides [`AssertionError`] for a single failed assertion and
//! [`AssertionErrors`] for accumulating every failure of a validation pass.

use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::prelude::*;

use crate::path::{PathSegment, StatePath};

/// A single assertion failure with its location and the offending value.
///
/// - **message**: Human-readable description of the failure (may be empty)
/// - **path**: Where in the state tree the failure occurred
/// - **actual**: The value that failed, or `None` when the value was absent
///
/// # Example
///
/// ```rust
/// use state_assert::AssertionError;
/// use serde_json::json;
///
/// let error = AssertionError::new("number is expected", Some(json!("1")))
///     .prefixed("count")
///     .prefixed("counter");
///
/// assert_eq!(error.path.to_string(), ".counter.count");
/// assert_eq!(error.actual_json(), "\"1\"");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionError {
    /// Human-readable error message. Empty for assertions declared without one.
    pub message: String,
    /// The path to the value that failed validation.
    pub path: StatePath,
    /// A snapshot of the failing value. `None` marks an absent value.
    pub actual: Option<Value>,
}

impl AssertionError {
    /// Creates an error located at the root path.
    pub fn new(message: impl Into<String>, actual: Option<Value>) -> Self {
        Self {
            message: message.into(),
            path: StatePath::root(),
            actual,
        }
    }

    /// Replaces the path and returns self for chaining.
    pub fn with_path(mut self, path: StatePath) -> Self {
        self.path = path;
        self
    }

    /// Returns this error with `segment` prepended to its path.
    pub fn prefixed(self, segment: impl Into<PathSegment>) -> Self {
        let path = self.path.prepend(segment.into());
        Self { path, ..self }
    }

    /// Renders the actual value as compact JSON, or `undefined` when absent.
    pub fn actual_json(&self) -> String {
        match &self.actual {
            Some(value) => value.to_string(),
            None => "undefined".to_string(),
        }
    }
}

impl Display for AssertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state{} == {}", self.path, self.actual_json())?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for AssertionError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<AssertionError>();
    assert_sync::<AssertionError>();
};

/// A non-empty collection of assertion failures.
///
/// `AssertionErrors` wraps a `NonEmptyVec<AssertionError>` so that a failed
/// validation always carries at least one error. Order is significant: it
/// follows field and module declaration order, then array index order.
///
/// # Combining Errors
///
/// ```rust
/// use state_assert::{AssertionError, AssertionErrors};
/// use stillwater::prelude::*;
///
/// let errors1 = AssertionErrors::single(AssertionError::new("number is expected", None));
/// let errors2 = AssertionErrors::single(AssertionError::new("null or undefined is expected", None));
///
/// let combined = errors1.combine(errors2);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionErrors(NonEmptyVec<AssertionError>);

impl AssertionErrors {
    /// Creates an `AssertionErrors` containing a single error.
    pub fn single(error: AssertionError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates an `AssertionErrors` from a vec, or `None` when it is empty.
    pub fn try_from_vec(errors: Vec<AssertionError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &AssertionError> {
        self.0.iter()
    }

    /// Returns all errors at the specified path.
    pub fn at_path(&self, path: &StatePath) -> Vec<&AssertionError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Returns the messages of all errors, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.message.as_str()).collect()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &AssertionError {
        self.0.head()
    }

    /// Returns a new collection with `segment` prepended to every path.
    pub fn prefixed(self, segment: impl Into<PathSegment>) -> Self {
        let segment = segment.into();
        let head = self.first().clone().prefixed(segment.clone());
        self.into_iter().skip(1).fold(Self::single(head), |acc, error| {
            acc.combine(Self::single(error.prefixed(segment.clone())))
        })
    }

    /// Converts this collection into a `Vec<AssertionError>`.
    pub fn into_vec(self) -> Vec<AssertionError> {
        self.0.into_vec()
    }
}

impl Semigroup for AssertionErrors {
    fn combine(self, other: Self) -> Self {
        AssertionErrors(self.0.combine(other.0))
    }
}

impl Display for AssertionErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Assertion failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for AssertionErrors {}

impl IntoIterator for AssertionErrors {
    type Item = AssertionError;
    type IntoIter = std::vec::IntoIter<AssertionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a AssertionErrors {
    type Item = &'a AssertionError;
    type IntoIter = Box<dyn Iterator<Item = &'a AssertionError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<AssertionErrors>();
    assert_sync::<AssertionErrors>();
};
