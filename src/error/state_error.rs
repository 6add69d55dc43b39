//! The failure handed back to the host when a validation pass fails.

use super::AssertionErrors;

/// Errors raised to the host application by the assertion plugin.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The state violated one or more assertions.
    ///
    /// `report` is the complete formatted report of the pass, never a
    /// partial one.
    #[error("AssertionError:\n{report}")]
    Invalid {
        /// The formatted report, one group per offending path.
        report: String,
        /// The structured errors the report was rendered from.
        errors: AssertionErrors,
    },
}

impl StateError {
    /// Returns the formatted report carried by this error.
    pub fn report(&self) -> &str {
        match self {
            StateError::Invalid { report, .. } => report,
        }
    }

    /// Returns the structured errors carried by this error.
    pub fn errors(&self) -> &AssertionErrors {
        match self {
            StateError::Invalid { errors, .. } => errors,
        }
    }
}
