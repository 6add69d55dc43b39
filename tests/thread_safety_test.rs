//! Tests for sharing assertions and plugins across threads.

use state_assert::{
    array_of, number, object, string, AssertPlugin, AssertionTree, MemorySink, OnInvalid,
};
use serde_json::json;
use std::sync::Arc;
use std::thread;

#[test]
fn test_concurrent_validation() {
    let user = Arc::new(object([("name", string()), ("age", number())]));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let user = Arc::clone(&user);
            thread::spawn(move || {
                let result = user.validate(&json!({
                    "name": format!("User{}", i),
                    "age": 20 + i
                }));
                assert!(result.is_success());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_failures_are_identical() {
    let list = array_of(number());
    let expected = list.validate(&json!([1, "x", true])).into_result().unwrap_err();

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let list = list.clone();
            thread::spawn(move || list.validate(&json!([1, "x", true])).into_result().unwrap_err())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_plugin_shared_between_threads() {
    let sink = MemorySink::new();
    let plugin = AssertPlugin::new(&AssertionTree::new().assertion("count", number()))
        .on_invalid(OnInvalid::Warn)
        .sink(sink.clone());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let plugin = plugin.clone();
            thread::spawn(move || {
                plugin.validate(&json!({ "count": i })).unwrap();
                plugin.validate(&json!({ "count": i.to_string() })).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(sink.lines().len(), 8);
    assert!(sink
        .lines()
        .iter()
        .all(|line| line.ends_with("\n\tnumber is expected")));
}
