//! Rendering of assertion errors into a report.
//!
//! Errors are grouped by path in first-seen order. Each group renders as a
//! header line `state<path> == <actual>` followed by one tab-indented line
//! per non-empty message:
//!
//! ```text
//! state.foo == 123
//! 	string is expected
//! state.bar == null
//! ```
//!
//! Values render as compact `serde_json` text, so a float keeps its
//! fraction: a state value parsed from `1.0` renders as `1.0`, not `1`.

use indexmap::IndexMap;

use crate::error::AssertionError;

/// The errors reported at one path.
struct Group<'a> {
    /// Last error seen at the path; its value goes into the header.
    last: &'a AssertionError,
    messages: Vec<&'a str>,
}

impl Group<'_> {
    fn render(&self, path: &str) -> String {
        let header = format!("state{} == {}", path, self.last.actual_json());
        self.messages
            .iter()
            .fold(header, |buf, message| format!("{}\n\t{}", buf, message))
    }
}

fn group<'a, I>(errors: I) -> IndexMap<String, Group<'a>>
where
    I: IntoIterator<Item = &'a AssertionError>,
{
    errors.into_iter().fold(IndexMap::new(), |mut groups, error| {
        let group = groups
            .entry(error.path.to_string())
            .or_insert_with(|| Group {
                last: error,
                messages: Vec::new(),
            });
        group.last = error;
        if !error.message.is_empty() {
            group.messages.push(error.message.as_str());
        }
        groups
    })
}

/// Renders errors into one block per distinct path, in first-seen order.
///
/// Each block is a header line plus its indented messages; the warn mode of
/// the plugin reports each block separately.
pub fn format_groups<'a, I>(errors: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a AssertionError>,
{
    group(errors)
        .iter()
        .map(|(path, group)| group.render(path))
        .collect()
}

/// Renders errors into a single deterministic report.
///
/// Actual values are printed with `serde_json`'s compact form; floats keep
/// their fractional part (`1.0`, `2.5`) and integers print without one.
///
/// # Example
///
/// ```rust
/// use state_assert::{format_errors, AssertionError, StatePath};
/// use serde_json::json;
///
/// let report = format_errors(&[
///     AssertionError::new("", Some(json!(123)))
///         .with_path(StatePath::from_segments(["foo", "bar"])),
/// ]);
///
/// assert_eq!(report, "state.foo.bar == 123");
/// ```
pub fn format_errors<'a, I>(errors: I) -> String
where
    I: IntoIterator<Item = &'a AssertionError>,
{
    format_groups(errors).join("\n")
}
