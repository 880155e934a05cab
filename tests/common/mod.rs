#![allow(dead_code)]

pub mod fixtures;

use jexpand::{ExpandOptions, expand_path, expand_path_with};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Expands `path` against `document`, panicking on an invalid document.
pub fn expand(document: &str, path: &str) -> Vec<String> {
    expand_path(document.as_bytes(), path).expect("fixture documents are valid JSON")
}

pub fn expand_with(document: &str, path: &str, options: &ExpandOptions) -> Vec<String> {
    expand_path_with(document.as_bytes(), path, options).expect("fixture documents are valid JSON")
}

/// Asserts the expansion of `path` against the shared people fixture.
#[track_caller]
pub fn assert_paths(path: &str, expected: &[&str]) {
    assert_eq!(
        expand(fixtures::PEOPLE, path),
        expected,
        "unexpected expansion of '{}'",
        path
    );
}
