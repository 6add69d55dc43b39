//! Object shape assertion.
//!
//! This module provides [`ObjectAssertion`] for checking that a value is a
//! JSON object and that its declared fields satisfy their assertions.

use indexmap::IndexMap;
use serde_json::Value;
use stillwater::Validation;

use crate::error::{AssertionError, AssertionErrors};
use crate::AssertionResult;

use super::traits::Validator;
use super::{accumulate, finish, Assertion};

const DEFAULT_MESSAGE: &str = "object is expected";

/// An assertion over the fields of a JSON object.
///
/// A value that is not an object (including `null`, absent values and
/// arrays) fails with a single error at the object's own location, and no
/// field is inspected. Otherwise every declared field is checked in
/// declaration order and its errors are reported under the field's key.
///
/// Only declared fields are checked: keys the object carries beyond the
/// declaration are ignored. A declared field missing from the object is
/// checked as an absent value.
///
/// # Example
///
/// ```rust
/// use state_assert::{boolean, number, ObjectAssertion};
/// use serde_json::json;
///
/// let value = ObjectAssertion::new()
///     .field("a", number())
///     .field("b", ObjectAssertion::new().field("c", boolean()));
///
/// let result = value.validate(&json!({ "a": 1, "b": { "c": 2 }, "extra": "x" }));
/// let errors = result.into_result().unwrap_err();
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.first().path.to_string(), ".b.c");
/// assert_eq!(errors.first().message, "boolean is expected");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ObjectAssertion {
    fields: IndexMap<String, Assertion>,
    type_error_message: Option<String>,
}

impl ObjectAssertion {
    /// Creates an object assertion with no declared fields.
    ///
    /// With no fields it accepts any object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field and the assertion its value must satisfy.
    ///
    /// Declaring the same key twice replaces the earlier assertion but keeps
    /// the key's original position.
    pub fn field(mut self, name: impl Into<String>, assertion: impl Into<Assertion>) -> Self {
        self.fields.insert(name.into(), assertion.into());
        self
    }

    /// Sets the message reported when the value is not an object.
    ///
    /// Defaults to `object is expected`.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.type_error_message = Some(message.into());
        self
    }

    /// Returns the declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
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

impl Validator for ObjectAssertion {
    fn check(&self, value: Option<&Value>) -> AssertionResult {
        let obj = match value {
            Some(Value::Object(obj)) => obj,
            other => return self.type_error(other),
        };

        let errors = self
            .fields
            .iter()
            .fold(None, |acc, (name, assertion)| match assertion.check(obj.get(name)) {
                Validation::Success(()) => acc,
                Validation::Failure(e) => Some(accumulate(acc, e.prefixed(name.as_str()))),
            });

        finish(errors)
    }
}

impl From<ObjectAssertion> for Assertion {
    fn from(object: ObjectAssertion) -> Self {
        Assertion::new(object)
    }
}

/// Creates an object assertion from `(key, assertion)` pairs.
///
/// Fields are checked in the order given.
///
/// # Example
///
/// ```rust
/// use state_assert::{number, object};
/// use serde_json::json;
///
/// let counter = object([("value", number())]);
///
/// let errors = counter.validate(&json!({ "value": "str" })).into_result().unwrap_err();
/// assert_eq!(errors.first().path.to_string(), ".value");
/// assert_eq!(errors.first().actual, Some(json!("str")));
/// ```
pub fn object<I, K, A>(fields: I) -> ObjectAssertion
where
    I: IntoIterator<Item = (K, A)>,
    K: Into<String>,
    A: Into<Assertion>,
{
    fields
        .into_iter()
        .fold(ObjectAssertion::new(), |object, (name, assertion)| {
            object.field(name, assertion)
        })
}
