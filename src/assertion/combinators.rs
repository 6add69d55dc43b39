//! Assertion combinators.
//!
//! - `and`: every member must hold
//! - `or`: at least one member must hold
//!
//! Both run every member and concatenate the members' errors in member
//! order. When the combined result is valid the collected errors are
//! discarded, so an `or` never leaks the errors of a rejected alternative.
//!
//! # Example
//!
//! ```rust
//! use state_assert::{number, optional, or, string};
//! use serde_json::json;
//!
//! let id = or([number(), string()]);
//! assert!(id.validate(&json!(42)).is_success());
//! assert!(id.validate(&json!("a-42")).is_success());
//!
//! let maybe_number = or([number(), optional()]);
//! let errors = maybe_number.validate(&json!(true)).into_result().unwrap_err();
//! assert_eq!(
//!     errors.messages(),
//!     vec!["number is expected", "null or undefined is expected"]
//! );
//! ```

use serde_json::Value;
use stillwater::Validation;

use crate::error::{AssertionError, AssertionErrors};
use crate::AssertionResult;

use super::traits::Validator;
use super::{accumulate, finish, Assertion};

/// Message reported by an `or` without alternatives.
const NO_ALTERNATIVE: &str = "no alternative is allowed";

/// Assertion combinators.
///
/// `Composite` provides two composition patterns:
/// - `All`: every member must hold (logical AND, vacuously true)
/// - `Any`: at least one member must hold (logical OR, false when empty)
#[derive(Clone, Debug)]
pub enum Composite {
    /// Every member must hold.
    All(Vec<Assertion>),
    /// At least one member must hold.
    Any(Vec<Assertion>),
}

impl Composite {
    fn members(&self) -> &[Assertion] {
        match self {
            Composite::All(members) | Composite::Any(members) => members,
        }
    }

    /// Validity of an empty composition.
    fn identity(&self) -> bool {
        matches!(self, Composite::All(_))
    }

    fn merge(&self, acc: bool, member: bool) -> bool {
        match self {
            Composite::All(_) => acc && member,
            Composite::Any(_) => acc || member,
        }
    }
}

impl Validator for Composite {
    fn check(&self, value: Option<&Value>) -> AssertionResult {
        let (valid, errors) = self.members().iter().map(|member| member.check(value)).fold(
            (self.identity(), None),
            |(valid, errors), result| match result {
                Validation::Success(()) => (self.merge(valid, true), errors),
                Validation::Failure(e) => (self.merge(valid, false), Some(accumulate(errors, e))),
            },
        );

        if valid {
            return Validation::Success(());
        }

        match errors {
            Some(errors) => finish(Some(errors)),
            // Only an empty `or` fails without member errors.
            None => Validation::Failure(AssertionErrors::single(AssertionError::new(
                NO_ALTERNATIVE,
                value.cloned(),
            ))),
        }
    }
}

impl From<Composite> for Assertion {
    fn from(composite: Composite) -> Self {
        Assertion::new(composite)
    }
}

/// Combines assertions so that all of them must hold.
///
/// An empty list accepts every value.
pub fn and<I>(members: I) -> Assertion
where
    I: IntoIterator,
    I::Item: Into<Assertion>,
{
    Composite::All(members.into_iter().map(Into::into).collect()).into()
}

/// Combines assertions so that at least one of them must hold.
///
/// When none holds, the errors of every alternative are reported.
pub fn or<I>(members: I) -> Assertion
where
    I: IntoIterator,
    I::Item: Into<Assertion>,
{
    Composite::Any(members.into_iter().map(Into::into).collect()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::{assert, boolean, number, optional, string};
    use serde_json::json;

    #[test]
    fn test_and_requires_all() {
        let positive = and([number(), assert(|v| v.as_f64().map_or(false, |n| n > 0.0), "positive")]);

        assert!(positive.validate(&json!(3)).is_success());
        assert!(positive.validate(&json!(-3)).is_failure());
    }

    #[test]
    fn test_and_concatenates_in_member_order() {
        let both = and([number(), string()]);
        let errors = both.validate(&json!(true)).into_result().unwrap_err();
        assert_eq!(errors.messages(), vec!["number is expected", "string is expected"]);
    }

    #[test]
    fn test_empty_and_is_valid() {
        let nothing = and(Vec::<Assertion>::new());
        assert!(nothing.validate(&json!(null)).is_success());
        assert!(nothing.validate_absent().is_success());
    }

    #[test]
    fn test_or_success_discards_rejected_branches() {
        let either = or([string(), number(), boolean()]);
        assert!(either.validate(&json!(false)).is_success());
    }

    #[test]
    fn test_or_failure_reports_every_alternative() {
        let either = or([number(), optional()]);
        let errors = either.validate(&json!("str")).into_result().unwrap_err();

        assert_eq!(
            errors.messages(),
            vec!["number is expected", "null or undefined is expected"]
        );
        assert!(errors.iter().all(|e| e.path.is_root()));
    }

    #[test]
    fn test_empty_or_fails_with_single_error() {
        let nothing = or(Vec::<Assertion>::new());
        let errors = nothing.validate(&json!(1)).into_result().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().message, NO_ALTERNATIVE);
        assert_eq!(errors.first().actual, Some(json!(1)));
    }

    #[test]
    fn test_nested_composites() {
        let nested = and([or([number(), string()]), assert(|v| !v.is_null(), "not null")]);

        assert!(nested.validate(&json!("a")).is_success());

        let errors = nested.validate(&json!(null)).into_result().unwrap_err();
        assert_eq!(
            errors.messages(),
            vec!["number is expected", "string is expected", "not null"]
        );
    }

    #[test]
    fn test_composite_accepts_mixed_members() {
        let shape = or([
            Assertion::from(crate::assertion::object([("a", number())])),
            crate::assertion::array().into(),
        ]);

        assert!(shape.validate(&json!({"a": 1})).is_success());
        assert!(shape.validate(&json!([])).is_success());
        assert!(shape.validate(&json!(1)).is_failure());
    }
}
