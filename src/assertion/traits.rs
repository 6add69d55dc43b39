//! Traits for assertion polymorphism.
//!
//! This module provides the [`Validator`] capability trait. Primitives,
//! combinators and shape checks all implement it, so any of them can be
//! wrapped in an [`Assertion`](super::Assertion) and composed with the others.

use serde_json::Value;

use crate::AssertionResult;

/// A check over one slot of the state tree.
///
/// `value` is `None` when the slot is absent, i.e. a declared key that the
/// enclosing object does not contain. Implementations must be total: every
/// input, including `None`, `null` and values of the wrong kind, yields a
/// result and never panics.
///
/// The `Send + Sync` bounds allow assertions to be shared with a store that
/// notifies from another thread.
///
/// Plain closures implement `Validator` as well:
///
/// ```rust
/// use state_assert::{Assertion, AssertionError, AssertionErrors};
/// use serde_json::json;
/// use stillwater::Validation;
///
/// let present = Assertion::from_fn(|value| match value {
///     Some(_) => Validation::Success(()),
///     None => Validation::Failure(AssertionErrors::single(AssertionError::new(
///         "value is required",
///         None,
///     ))),
/// });
///
/// assert!(present.validate(&json!(null)).is_success());
/// assert!(present.validate_absent().is_failure());
/// ```
pub trait Validator: Send + Sync {
    /// Checks a value, or an absent slot when `value` is `None`.
    fn check(&self, value: Option<&Value>) -> AssertionResult;
}

impl<F> Validator for F
where
    F: Fn(Option<&Value>) -> AssertionResult + Send + Sync,
{
    fn check(&self, value: Option<&Value>) -> AssertionResult {
        self(value)
    }
}
