//! Integration tests for report formatting.

use serde_json::json;
use state_assert::{format_errors, format_groups, AssertionError, PathSegment, StatePath};

fn at<S: Into<PathSegment>>(
    segments: impl IntoIterator<Item = S>,
    actual: serde_json::Value,
    message: &str,
) -> AssertionError {
    AssertionError::new(message, Some(actual)).with_path(StatePath::from_segments(segments))
}

#[test]
fn test_shows_target_path_and_actual_value() {
    let report = format_errors(&[
        at(["foo", "bar"], json!(123), ""),
        AssertionError::new("", Some(json!(true))).with_path(StatePath::from_segments([
            PathSegment::key("foo"),
            PathSegment::index(3),
            PathSegment::key("baz"),
        ])),
        AssertionError::new("", Some(json!({ "test": 10 }))).with_path(StatePath::from_segments([
            PathSegment::index(10),
            PathSegment::key("a"),
            PathSegment::key("b"),
        ])),
    ]);

    assert_eq!(
        report,
        "state.foo.bar == 123\nstate.foo[3].baz == true\nstate[10].a.b == {\"test\":10}"
    );
}

#[test]
fn test_shows_assertion_messages() {
    let report = format_errors(&[
        at(["foo"], json!(123), "string is expected"),
        at(["bar"], json!(null), ""),
        at(["baz"], json!("hello"), "number is expected"),
        at(["baz"], json!("hello"), "null or undefined is expected"),
    ]);

    assert_eq!(
        report,
        "state.foo == 123\n\
         \tstring is expected\n\
         state.bar == null\n\
         state.baz == \"hello\"\n\
         \tnumber is expected\n\
         \tnull or undefined is expected"
    );
}

#[test]
fn test_single_error_without_message() {
    assert_eq!(
        format_errors(&[at(["foo", "bar"], json!(123), "")]),
        "state.foo.bar == 123"
    );
}

#[test]
fn test_interleaved_paths_are_grouped() {
    let groups = format_groups(&[
        at(["a"], json!(1), "one"),
        at(["b"], json!(2), "two"),
        at(["a"], json!(1), ""),
        at(["a"], json!(1), "three"),
    ]);

    assert_eq!(groups, vec!["state.a == 1\n\tone\n\tthree", "state.b == 2\n\ttwo"]);
}

#[test]
fn test_report_is_deterministic() {
    let errors = vec![
        at(["x"], json!([1, 2]), "array of strings is expected"),
        at(["y"], json!({ "k": null }), ""),
    ];
    assert_eq!(format_errors(&errors), format_errors(&errors));
}

#[test]
fn test_formats_validation_output() {
    let list = state_assert::array_of(state_assert::number());
    let errors = list.validate(&json!([1, "x", true])).into_result().unwrap_err();

    assert_eq!(
        format_errors(&errors),
        "state[1] == \"x\"\n\tnumber is expected\nstate[2] == true\n\tnumber is expected"
    );
}
