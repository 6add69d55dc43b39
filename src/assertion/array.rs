//! Array shape assertion.
//!
//! This module provides [`ArrayAssertion`] for checking that a value is a
//! JSON array and, optionally, that each of its items satisfies an assertion.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{AssertionError, AssertionErrors};
use crate::AssertionResult;

use super::traits::Validator;
use super::{accumulate, finish, Assertion};

const DEFAULT_MESSAGE: &str = "array is expected";

/// An assertion over a JSON array and its items.
///
/// A value that is not an array fails with a single error at the array's
/// own location. Without an item assertion any array passes. With one,
/// every item is checked (there is no short-circuit) and each item's errors
/// are reported under its index.
///
/// # Example
///
/// ```rust
/// use state_assert::{number, ArrayAssertion};
/// use serde_json::json;
///
/// let numbers = ArrayAssertion::of(number());
///
/// let errors = numbers
///     .validate(&json!([1, 2, "string", true, 5]))
///     .into_result()
///     .unwrap_err();
///
/// let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
/// assert_eq!(paths, vec!["[2]", "[3]"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArrayAssertion {
    item: Option<Assertion>,
    type_error_message: Option<String>,
}

impl ArrayAssertion {
    /// Creates an assertion that accepts any array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assertion that checks every item with `item`.
    pub fn of(item: impl Into<Assertion>) -> Self {
        Self {
            item: Some(item.into()),
            type_error_message: None,
        }
    }

    /// Sets the message reported when the value is not an array.
    ///
    /// Defaults to `array is expected`.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.type_error_message = Some(message.into());
        self
    }

    /// Validates a value against this assertion.
    pub fn validate(&self, value: &Value) -> AssertionResult {
        self.check(Some(value))
    }

    fn type_error(&self, value: Option<&Value>) -> AssertionResult {
        let message = self
            .type_error_message
            .as_deref()
            .unwrap_or(DEFAULT_MESSAGE);
        Validation::Failure(AssertionErrors::single(AssertionError::new(
            message,
            value.cloned(),
        )))
    }
}

impl Validator for ArrayAssertion {
    fn check(&self, value: Option<&Value>) -> AssertionResult {
        let items = match value {
            Some(Value::Array(items)) => items,
            other => return self.type_error(other),
        };

        let item_assertion = match &self.item {
            Some(assertion) => assertion,
            None => return Validation::Success(()),
        };

        let errors = items
            .iter()
            .enumerate()
            .fold(None, |acc, (index, item)| match item_assertion.check(Some(item)) {
                Validation::Success(()) => acc,
                Validation::Failure(e) => Some(accumulate(acc, e.prefixed(index))),
            });

        finish(errors)
    }
}

impl From<ArrayAssertion> for Assertion {
    fn from(array: ArrayAssertion) -> Self {
        Assertion::new(array)
    }
}

/// Creates an assertion that accepts any array.
pub fn array() -> ArrayAssertion {
    ArrayAssertion::new()
}

/// Creates an assertion that checks every array item with `item`.
pub fn array_of(item: impl Into<Assertion>) -> ArrayAssertion {
    ArrayAssertion::of(item)
}
