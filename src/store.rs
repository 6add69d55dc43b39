//! The host store boundary.
//!
//! The assertion plugin needs two things from a state store: the current
//! state snapshot and a way to be told about every change. [`StateStore`]
//! captures exactly that. [`MemoryStore`] is a minimal in-process store for
//! embedders without a store of their own.

use std::fmt;

use serde_json::Value;

use crate::error::StateError;

/// Callback invoked with the full state after every change.
pub type Listener = Box<dyn FnMut(&Value) -> Result<(), StateError> + Send>;

/// A state container that publishes change notifications.
///
/// Notifications are delivered one at a time, each processed to completion
/// before the next change is applied.
pub trait StateStore {
    /// Returns the current state snapshot.
    fn state(&self) -> &Value;

    /// Registers a listener for every subsequent change.
    fn subscribe(&mut self, listener: Listener);
}

/// An in-memory state store.
///
/// State changes go through [`commit`](MemoryStore::commit), which applies a
/// mutation and then notifies every listener, in subscription order, with the
/// new state.
///
/// # Example
///
/// ```rust
/// use state_assert::{AssertPlugin, AssertionTree, MemoryStore, number};
/// use serde_json::json;
///
/// let tree = AssertionTree::new().assertion("count", number());
/// let mut store = MemoryStore::with_plugin(json!({ "count": 0 }), AssertPlugin::new(&tree))?;
///
/// store.commit(|state| state["count"] = json!(1))?;
///
/// let err = store.commit(|state| state["count"] = json!("1")).unwrap_err();
/// assert_eq!(err.report(), "state.count == \"1\"\n\tnumber is expected");
/// # Ok::<(), state_assert::StateError>(())
/// ```
pub struct MemoryStore {
    state: Value,
    listeners: Vec<Listener>,
}

impl MemoryStore {
    /// Creates a store holding `initial`.
    pub fn new(initial: Value) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
        }
    }

    /// Creates a store and installs `plugin` on it.
    ///
    /// Fails when the initial state already violates the plugin's assertions
    /// and the plugin runs in throw mode.
    pub fn with_plugin(
        initial: Value,
        plugin: crate::plugin::AssertPlugin,
    ) -> Result<Self, StateError> {
        let mut store = Self::new(initial);
        plugin.install(&mut store)?;
        Ok(store)
    }

    /// Applies `mutation` to the state and notifies listeners.
    ///
    /// Every listener runs even if an earlier one fails; the first failure
    /// is returned. The mutation itself is kept either way.
    pub fn commit<F>(&mut self, mutation: F) -> Result<(), StateError>
    where
        F: FnOnce(&mut Value),
    {
        mutation(&mut self.state);
        self.notify()
    }

    /// Replaces the whole state and notifies listeners.
    pub fn replace_state(&mut self, state: Value) -> Result<(), StateError> {
        self.commit(|current| *current = state)
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) -> Result<(), StateError> {
        let state = &self.state;
        self.listeners
            .iter_mut()
            .map(|listener| listener(state))
            .fold(Ok(()), |acc, result| acc.and(result))
    }
}

impl StateStore for MemoryStore {
    fn state(&self) -> &Value {
        &self.state
    }

    fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
