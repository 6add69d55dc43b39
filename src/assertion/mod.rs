//! Composable assertions over state values.
//!
//! An [`Assertion`] wraps a pure check `value -> AssertionResult`. Primitive
//! assertions test a single value and report errors at the root path;
//! `object` and `array` descend into structure and prepend the key or index
//! of every nested error; `and` and `or` combine assertions and collect the
//! errors of every member rather than stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use state_assert::{array_of, number, object, string};
//! use serde_json::json;
//!
//! let todo = object([
//!     ("title", string()),
//!     ("priority", number().optional()),
//! ]);
//! let todos = array_of(todo);
//!
//! let result = todos.validate(&json!([
//!     { "title": "write docs" },
//!     { "title": 3, "priority": "high" }
//! ]));
//!
//! let errors = result.into_result().unwrap_err();
//! let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
//! assert_eq!(paths, vec!["[1].title", "[1].priority", "[1].priority"]);
//! ```

mod array;
mod combinators;
mod object;
mod primitive;
mod traits;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use stillwater::prelude::*;
use stillwater::Validation;

use crate::error::AssertionErrors;
use crate::AssertionResult;

pub use array::{array, array_of, ArrayAssertion};
pub use combinators::{and, or, Composite};
pub use object::{object, ObjectAssertion};
pub use primitive::{assert, boolean, number, optional, string, Predicate};
pub use traits::Validator;

/// An immutable, composable assertion.
///
/// `Assertion` is a cheaply clonable handle to a [`Validator`]. Cloning
/// shares the underlying check; since validators hold no mutable state the
/// same assertion can appear in many places of a declaration tree.
///
/// # Example
///
/// ```rust
/// use state_assert::number;
/// use serde_json::json;
///
/// let small = number().assert(|v| v.as_f64().map_or(false, |n| n < 10.0), "value < 10");
///
/// assert!(small.validate(&json!(5)).is_success());
///
/// let errors = small.validate(&json!("str")).into_result().unwrap_err();
/// assert_eq!(errors.messages(), vec!["number is expected", "value < 10"]);
/// ```
#[derive(Clone)]
pub struct Assertion {
    validator: Arc<dyn Validator>,
}

impl Assertion {
    /// Wraps a validator in an assertion.
    pub fn new<V>(validator: V) -> Self
    where
        V: Validator + 'static,
    {
        Self {
            validator: Arc::new(validator),
        }
    }

    /// Creates an assertion from a raw check function.
    ///
    /// The function receives `None` for an absent slot.
    pub fn from_fn<F>(check: F) -> Self
    where
        F: Fn(Option<&Value>) -> AssertionResult + Send + Sync + 'static,
    {
        Self::new(check)
    }

    /// Validates a value against this assertion.
    pub fn validate(&self, value: &Value) -> AssertionResult {
        self.validator.check(Some(value))
    }

    /// Validates an absent slot against this assertion.
    pub fn validate_absent(&self) -> AssertionResult {
        self.validator.check(None)
    }

    /// Refines this assertion with an extra predicate.
    ///
    /// Equivalent to `and([self, assert(predicate, message)])`: the errors of
    /// this assertion are kept and the predicate's error is appended.
    pub fn assert<F>(self, predicate: F, message: impl Into<String>) -> Assertion
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        and([self, assert(predicate, message)])
    }

    /// Also accepts an empty value (null or absent).
    ///
    /// Equivalent to `or([self, optional()])`.
    pub fn optional(self) -> Assertion {
        or([self, optional()])
    }
}

impl Validator for Assertion {
    fn check(&self, value: Option<&Value>) -> AssertionResult {
        self.validator.check(value)
    }
}

impl fmt::Debug for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assertion").finish_non_exhaustive()
    }
}

/// Appends `errors` to an optional accumulator.
pub(crate) fn accumulate(acc: Option<AssertionErrors>, errors: AssertionErrors) -> AssertionErrors {
    match acc {
        Some(acc) => acc.combine(errors),
        None => errors,
    }
}

/// Turns an accumulator into a result: no errors means success.
pub(crate) fn finish(acc: Option<AssertionErrors>) -> AssertionResult {
    match acc {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}
