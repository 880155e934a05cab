//! Path syntax for gjson-style JSON paths.
//!
//! This crate knows nothing about documents. It splits raw path text into
//! segments, recognizes multipath groupings, filter queries, modifiers and
//! tilde tests, and handles the backslash escaping that keeps literal keys
//! apart from path syntax. The `jexpand-engine` crate walks a document with
//! the pieces produced here.

pub mod ast;
pub mod error;
pub mod escape;
pub mod multipath;
mod parser;
mod segment;

// --- Public API ---
pub use ast::{
    BUILTIN_MODIFIERS, CompareOp, Modifier, Multipath, MultipathComponent, NESTED_SENTINEL,
    QueryCondition, QuerySegment, Segment, Separator, Tilde,
};
pub use error::{JPathError, validate};
pub use escape::{
    array_index, contains_unescaped, ends_with_unescaped, escape_key, find_unescaped,
    split_unescaped, unescape,
};
pub use multipath::{split_components, split_keyed_components, strip_literal_suffix};
pub use parser::{parse_condition, parse_modifier, parse_operator, parse_query_segment, parse_tilde};
pub use segment::{rest_text, segment};
