//! Path expansion for gjson-style JSON paths.
//!
//! Given a document and a path that may contain wildcards, `#` array markers
//! or `#(...)` filter queries, the engine enumerates the concrete literal
//! paths the expression selects:
//!
//! ```
//! let doc = br#"{"a":[{"x":1},{"x":2},{"x":3}]}"#;
//! let paths = jexpand_engine::expand_path(doc, "a.#(x>1)#.x").unwrap();
//! assert_eq!(paths, vec!["a.1.x", "a.2.x"]);
//! ```
//!
//! Malformed path syntax never fails; it is expanded best-effort. Only a
//! document that is not valid JSON is an error.

pub mod error;
pub mod expand;
pub mod glob;
pub mod options;
pub mod predicate;

// --- Public API ---
pub use error::ExpandError;
pub use expand::{Expander, ROOT_TOKEN};
pub use glob::Glob;
pub use options::{ExpandOptions, LeafPolicy, LengthMode};
pub use predicate::Predicate;

/// Parses `document` and expands `path` with default options.
pub fn expand_path(document: &[u8], path: &str) -> Result<Vec<String>, ExpandError> {
    expand_path_with(document, path, &ExpandOptions::default())
}

pub fn expand_path_with(
    document: &[u8],
    path: &str,
    options: &ExpandOptions,
) -> Result<Vec<String>, ExpandError> {
    if path.is_empty() {
        return Ok(vec![String::new()]);
    }
    let root: serde_json::Value = serde_json::from_slice(document)?;
    Ok(Expander::with_options(&root, options.clone()).expand(path))
}
