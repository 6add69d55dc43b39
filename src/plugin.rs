//! Store plugin that re-validates the state after every change.
//!
//! [`AssertPlugin`] collects an [`AssertionTree`] once, validates the state
//! when installed, and re-validates the full state on every change
//! notification. What happens on a violation is configured with
//! [`OnInvalid`]:
//!
//! - `Throw` (default): the pass fails with [`StateError::Invalid`] carrying
//!   the complete report;
//! - `Warn`: each offending path is reported to a [`ReportSink`] and the
//!   store carries on.

use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use stillwater::Validation;

use crate::assertion::Assertion;
use crate::collector::AssertionTree;
use crate::error::StateError;
use crate::format::{format_errors, format_groups};
use crate::store::StateStore;

/// What the plugin does when the state violates its assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnInvalid {
    /// Fail the validation pass with the full report.
    #[default]
    Throw,
    /// Report one line per offending path and continue.
    Warn,
}

impl Display for OnInvalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnInvalid::Throw => write!(f, "throw"),
            OnInvalid::Warn => write!(f, "warn"),
        }
    }
}

impl FromStr for OnInvalid {
    type Err = ParseOnInvalidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "throw" => Ok(OnInvalid::Throw),
            "warn" => Ok(OnInvalid::Warn),
            _ => Err(ParseOnInvalidError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown [`OnInvalid`] policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown invalid-state policy '{0}', expected 'throw' or 'warn'")]
pub struct ParseOnInvalidError(String);

/// Destination for warn-mode reports.
///
/// Closures taking `&str` implement this trait.
pub trait ReportSink: Send + Sync {
    /// Receives one report block (a header line plus its messages).
    fn report(&self, message: &str);
}

impl<F> ReportSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, message: &str) {
        self(message)
    }
}

/// Emits reports as `tracing` warnings under the `state_assert` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&self, message: &str) {
        tracing::warn!(target: "state_assert", "{}", message);
    }
}

/// Keeps reports in memory, for tests and for hosts that surface them later.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every report received so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Removes and returns every report received so far.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl ReportSink for MemorySink {
    fn report(&self, message: &str) {
        self.lines.lock().push(message.to_string());
    }
}

/// Validates store state against a declaration tree.
///
/// # Example
///
/// ```rust
/// use state_assert::{AssertPlugin, AssertionTree, MemorySink, OnInvalid, number};
/// use serde_json::json;
///
/// let sink = MemorySink::new();
/// let plugin = AssertPlugin::new(&AssertionTree::new().assertion("count", number()))
///     .on_invalid(OnInvalid::Warn)
///     .sink(sink.clone());
///
/// assert!(plugin.validate(&json!({ "count": "zero" })).is_ok());
/// assert_eq!(sink.lines(), vec!["state.count == \"zero\"\n\tnumber is expected"]);
/// ```
#[derive(Clone)]
pub struct AssertPlugin {
    assertion: Assertion,
    on_invalid: OnInvalid,
    sink: Arc<dyn ReportSink>,
}

impl AssertPlugin {
    /// Creates a plugin for `tree`, in throw mode, reporting through tracing.
    pub fn new(tree: &AssertionTree) -> Self {
        Self::from_assertion(tree.collect())
    }

    /// Creates a plugin from an already collected root assertion.
    pub fn from_assertion(assertion: Assertion) -> Self {
        Self {
            assertion,
            on_invalid: OnInvalid::default(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Sets the behavior on invalid state.
    pub fn on_invalid(mut self, on_invalid: OnInvalid) -> Self {
        self.on_invalid = on_invalid;
        self
    }

    /// Sets the sink that receives warn-mode reports.
    pub fn sink(mut self, sink: impl ReportSink + 'static) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Returns the configured behavior on invalid state.
    pub fn mode(&self) -> OnInvalid {
        self.on_invalid
    }

    /// Runs one full validation pass over `state`.
    ///
    /// # Errors
    ///
    /// Returns `StateError::Invalid` with the complete report when the state
    /// is invalid and the plugin is in throw mode. In warn mode the report is
    /// sent to the sink, one block per offending path, and `Ok(())` is
    /// returned.
    pub fn validate(&self, state: &Value) -> Result<(), StateError> {
        let errors = match self.assertion.validate(state) {
            Validation::Success(()) => {
                tracing::debug!(target: "state_assert", "state satisfies all assertions");
                return Ok(());
            }
            Validation::Failure(errors) => errors,
        };

        tracing::debug!(
            target: "state_assert",
            errors = errors.len(),
            mode = %self.on_invalid,
            "state violates assertions"
        );

        match self.on_invalid {
            OnInvalid::Throw => Err(StateError::Invalid {
                report: format_errors(&errors),
                errors,
            }),
            OnInvalid::Warn => {
                for block in format_groups(&errors) {
                    self.sink.report(&block);
                }
                Ok(())
            }
        }
    }

    /// Validates the store's current state and subscribes to its changes.
    ///
    /// # Errors
    ///
    /// Fails without subscribing when the current state is invalid in throw
    /// mode.
    pub fn install<S>(self, store: &mut S) -> Result<(), StateError>
    where
        S: StateStore + ?Sized,
    {
        tracing::debug!(target: "state_assert", mode = %self.on_invalid, "installing assertion plugin");
        self.validate(store.state())?;
        store.subscribe(Box::new(move |state| self.validate(state)));
        Ok(())
    }
}

impl fmt::Debug for AssertPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertPlugin")
            .field("on_invalid", &self.on_invalid)
            .finish_non_exhaustive()
    }
}
