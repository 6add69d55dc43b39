//! # state-assert
//!
//! Runtime assertions for hierarchical state trees. Every violation is
//! collected, with its exact location and the offending value, instead of
//! stopping at the first failure.
//!
//! ## Overview
//!
//! Declare an [`Assertion`] per state key, nest the declarations the way the
//! store nests its modules ([`AssertionTree`]), and install an
//! [`AssertPlugin`] on the store. The plugin validates the state when it is
//! installed and again after every change, then either fails with the full
//! report or warns once per offending path.
//!
//! Failures are accumulated through stillwater's `Validation` type, so a
//! successful check never carries errors and a failed one always carries at
//! least one.
//!
//! ## Core Types
//!
//! - [`Assertion`]: a composable check, built from [`number`], [`string`],
//!   [`boolean`], [`optional`], [`assert`], [`object`], [`array`],
//!   [`and`] and [`or`]
//! - [`AssertionError`] / [`AssertionErrors`]: failures tagged with a
//!   [`StatePath`] and the actual value
//! - [`AssertionTree`]: the declaration, collected into one root assertion
//! - [`format_errors`]: the grouped, deterministic report
//! - [`AssertPlugin`]: the store integration, configured with [`OnInvalid`]
//!
//! ## Example
//!
//! ```rust
//! use state_assert::{array_of, number, object, string, AssertPlugin, AssertionTree, MemoryStore};
//! use serde_json::json;
//!
//! let todos = AssertionTree::new()
//!     .assertion("items", array_of(object([("title", string())])))
//!     .assertion("filter", string().optional());
//! let tree = AssertionTree::new()
//!     .assertion("version", number())
//!     .module("todos", todos);
//!
//! let mut store = MemoryStore::with_plugin(
//!     json!({ "version": 1, "todos": { "items": [] } }),
//!     AssertPlugin::new(&tree),
//! )
//! .unwrap();
//!
//! let err = store
//!     .commit(|state| state["todos"]["items"] = json!([{ "title": 3 }]))
//!     .unwrap_err();
//!
//! assert_eq!(
//!     err.to_string(),
//!     "AssertionError:\nstate.todos.items[0].title == 3\n\tstring is expected"
//! );
//! ```

pub mod assertion;
pub mod collector;
pub mod error;
pub mod format;
pub mod path;
pub mod plugin;
pub mod store;

pub use assertion::{
    and, array, array_of, assert, boolean, number, object, optional, or, string, ArrayAssertion,
    Assertion, Composite, ObjectAssertion, Predicate, Validator,
};
pub use collector::{collect, AssertionTree};
pub use error::{AssertionError, AssertionErrors, StateError};
pub use format::{format_errors, format_groups};
pub use path::{PathSegment, StatePath};
pub use plugin::{AssertPlugin, MemorySink, OnInvalid, ParseOnInvalidError, ReportSink, TracingSink};
pub use store::{Listener, MemoryStore, StateStore};

/// Result of checking one value: `Success(())` or every accumulated failure.
pub type AssertionResult = stillwater::Validation<(), AssertionErrors>;
