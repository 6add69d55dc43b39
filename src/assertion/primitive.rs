//! Primitive assertions.
//!
//! A primitive assertion tests a single value with a predicate. It has no
//! internal structure, so its errors are always reported at the root path;
//! enclosing `object`/`array` assertions add the location.

use serde_json::Value;
use stillwater::Validation;

use crate::error::{AssertionError, AssertionErrors};
use crate::AssertionResult;

use super::traits::Validator;
use super::Assertion;

/// Stand-in handed to predicates for an absent slot.
static ABSENT: Value = Value::Null;

type PredicateFn = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// A predicate with the message reported when it does not hold.
///
/// Predicates see an absent slot as `null`; the reported error still records
/// the value as absent.
pub struct Predicate {
    predicate: PredicateFn,
    message: String,
}

impl Predicate {
    /// Creates a predicate check. `message` may be empty.
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    /// Returns the message reported on failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Validator for Predicate {
    fn check(&self, value: Option<&Value>) -> AssertionResult {
        if (self.predicate)(value.unwrap_or(&ABSENT)) {
            Validation::Success(())
        } else {
            Validation::Failure(AssertionErrors::single(AssertionError::new(
                self.message.clone(),
                value.cloned(),
            )))
        }
    }
}

/// Creates an assertion from a predicate and a failure message.
///
/// Pass an empty message to report only the location and value.
///
/// # Example
///
/// ```rust
/// use state_assert::assert;
/// use serde_json::json;
///
/// let even = assert(|v| v.as_i64().map_or(false, |n| n % 2 == 0), "even number is expected");
///
/// assert!(even.validate(&json!(4)).is_success());
///
/// let errors = even.validate(&json!(3)).into_result().unwrap_err();
/// assert_eq!(errors.first().message, "even number is expected");
/// assert!(errors.first().path.is_root());
/// ```
pub fn assert<F>(predicate: F, message: impl Into<String>) -> Assertion
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Assertion::new(Predicate::new(predicate, message))
}

/// Asserts that the value is a number.
pub fn number() -> Assertion {
    assert(Value::is_number, "number is expected")
}

/// Asserts that the value is a string.
pub fn string() -> Assertion {
    assert(Value::is_string, "string is expected")
}

/// Asserts that the value is a boolean.
pub fn boolean() -> Assertion {
    assert(Value::is_boolean, "boolean is expected")
}

/// Asserts that the value is empty: `null` or absent.
///
/// Mostly used through [`Assertion::optional`] to permit omission.
pub fn optional() -> Assertion {
    assert(Value::is_null, "null or undefined is expected")
}
