//! Declaration trees and their collection into a single root assertion.
//!
//! An [`AssertionTree`] mirrors the module nesting of the host store: each
//! node declares assertions for its own state keys and, recursively, trees
//! for its sub-modules. [`collect`] folds a tree into one [`Assertion`] whose
//! shape matches the whole state tree, so error paths read as
//! `.module.submodule.field`.

use indexmap::IndexMap;

use crate::assertion::{and, Assertion, ObjectAssertion};

/// A static declaration of assertions, nested by module.
///
/// Keys and module names are kept in declaration order, which is the order
/// violations are reported in.
///
/// A module that declares assertions, even an empty set of them through
/// [`AssertionTree::declare_assertions`], requires its state to be an object.
/// A module that declares none places no constraint on its own state.
///
/// # Example
///
/// ```rust
/// use state_assert::{number, AssertionTree};
/// use serde_json::json;
///
/// let tree = AssertionTree::new().module(
///     "a",
///     AssertionTree::new()
///         .assertion("value", number())
///         .module("b", AssertionTree::new().assertion("value", number())),
/// );
///
/// let root = tree.collect();
/// let errors = root
///     .validate(&json!({ "a": { "value": null, "b": { "value": null } } }))
///     .into_result()
///     .unwrap_err();
///
/// let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
/// assert_eq!(paths, vec![".a.value", ".a.b.value"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AssertionTree {
    assertions: IndexMap<String, Assertion>,
    modules: IndexMap<String, AssertionTree>,
    declared: bool,
}

impl AssertionTree {
    /// Creates an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the assertion for one state key of this module.
    pub fn assertion(mut self, key: impl Into<String>, assertion: impl Into<Assertion>) -> Self {
        self.assertions.insert(key.into(), assertion.into());
        self.declared = true;
        self
    }

    /// Marks this module as declaring assertions, possibly none.
    ///
    /// The module state must then be an object even with no keys declared.
    pub fn declare_assertions(mut self) -> Self {
        self.declared = true;
        self
    }

    /// Returns true if this module declares assertions for its own keys.
    pub fn has_assertions(&self) -> bool {
        self.declared
    }

    /// Declares a nested module.
    pub fn module(mut self, name: impl Into<String>, module: AssertionTree) -> Self {
        self.modules.insert(name.into(), module);
        self
    }

    /// Returns the assertions declared directly on this module.
    pub fn assertions(&self) -> &IndexMap<String, Assertion> {
        &self.assertions
    }

    /// Returns the nested module declarations.
    pub fn modules(&self) -> &IndexMap<String, AssertionTree> {
        &self.modules
    }

    /// Returns true if neither assertions nor modules are declared.
    pub fn is_empty(&self) -> bool {
        self.assertions.is_empty() && self.modules.is_empty()
    }

    /// Returns the nesting depth of the declaration (a single node is 1).
    pub fn depth(&self) -> usize {
        1 + self.modules.values().map(AssertionTree::depth).max().unwrap_or(0)
    }

    /// Folds this declaration into a single root assertion.
    pub fn collect(&self) -> Assertion {
        collect(self)
    }
}

/// Folds a declaration tree into one assertion over the whole state.
///
/// A node becomes the `and` of an object assertion over its own keys (when it
/// declares assertions, even an empty set) and an object assertion mapping each sub-module name to the
/// sub-module's collected assertion (when it has any). A node declaring
/// nothing accepts every value.
pub fn collect(tree: &AssertionTree) -> Assertion {
    let mut parts: Vec<Assertion> = Vec::with_capacity(2);

    if tree.declared {
        let own = tree
            .assertions
            .iter()
            .fold(ObjectAssertion::new(), |object, (key, assertion)| {
                object.field(key.as_str(), assertion.clone())
            });
        parts.push(own.into());
    }

    if !tree.modules.is_empty() {
        let modules = tree
            .modules
            .iter()
            .fold(ObjectAssertion::new(), |object, (name, module)| {
                object.field(name.as_str(), collect(module))
            });
        parts.push(modules.into());
    }

    and(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::{array_of, number, string};
    use serde_json::json;

    #[test]
    fn test_empty_tree_accepts_anything() {
        let root = AssertionTree::new().collect();
        assert!(root.validate(&json!(null)).is_success());
        assert!(root.validate(&json!({"a": 1})).is_success());
    }

    #[test]
    fn test_root_assertions() {
        let root = AssertionTree::new().assertion("value", string()).collect();

        assert!(root.validate(&json!({"value": "x"})).is_success());

        let errors = root.validate(&json!({"value": 1})).into_result().unwrap_err();
        assert_eq!(errors.first().path.to_string(), ".value");
        assert_eq!(errors.first().message, "string is expected");
    }

    #[test]
    fn test_non_object_state_reports_once_per_part() {
        let root = AssertionTree::new()
            .assertion("value", number())
            .module("sub", AssertionTree::new())
            .collect();

        let errors = root.validate(&json!(7)).into_result().unwrap_err();
        assert_eq!(errors.messages(), vec!["object is expected", "object is expected"]);
        assert!(errors.iter().all(|e| e.path.is_root()));
    }

    #[test]
    fn test_missing_module_state() {
        let root = AssertionTree::new()
            .module("foo", AssertionTree::new().assertion("value", number()))
            .collect();

        let errors = root.validate(&json!({})).into_result().unwrap_err();
        assert_eq!(errors.first().path.to_string(), ".foo");
        assert_eq!(errors.first().message, "object is expected");
        assert_eq!(errors.first().actual, None);
    }

    #[test]
    fn test_own_keys_reported_before_modules() {
        let root = AssertionTree::new()
            .module("m", AssertionTree::new().assertion("x", number()))
            .assertion("ids", array_of(number()))
            .collect();

        let errors = root
            .validate(&json!({"ids": [1, "2"], "m": {"x": "1"}}))
            .into_result()
            .unwrap_err();
        let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec![".ids[1]", ".m.x"]);
    }

    #[test]
    fn test_empty_declaration_still_requires_object() {
        let declared = AssertionTree::new().declare_assertions();
        assert!(declared.has_assertions());
        assert!(!AssertionTree::new().has_assertions());

        let root = declared.collect();
        assert!(root.validate(&json!({"any": 1})).is_success());

        let errors = root.validate(&json!("x")).into_result().unwrap_err();
        assert_eq!(errors.messages(), vec!["object is expected"]);
        assert!(errors.first().path.is_root());

        assert!(AssertionTree::new().collect().validate(&json!("x")).is_success());
    }

    #[test]
    fn test_depth_and_accessors() {
        let tree = AssertionTree::new()
            .assertion("a", number())
            .module("b", AssertionTree::new().module("c", AssertionTree::new()));

        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.assertions().len(), 1);
        assert_eq!(tree.modules().len(), 1);
        assert!(!tree.is_empty());
        assert!(AssertionTree::new().is_empty());
    }
}
