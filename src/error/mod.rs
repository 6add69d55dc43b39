//! Error types for assertion failures.
//!
//! This module provides types for representing assertion failures with their
//! location in the state tree and the offending value, plus the error raised
//! to the host application when a validation pass fails in throw mode.

mod assertion_error;
mod state_error;

pub use assertion_error::{AssertionError, AssertionErrors};
pub use state_error::StateError;
