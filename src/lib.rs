//! Expands gjson-style JSON path expressions into the literal paths they
//! select in a document.
//!
//! The work is split across two crates re-exported here: `jpath` for path
//! syntax and `engine` for walking a document. This crate adds file-based
//! configuration and the `jexpand` command-line tool.

pub mod config;
pub mod error;

pub use jexpand_engine as engine;
pub use jexpand_jpath as jpath;

// --- Public API ---
pub use config::{OptionOverrides, load_options, resolve_options};
pub use error::JexpandError;
pub use jexpand_engine::{
    ExpandError, ExpandOptions, Expander, LeafPolicy, LengthMode, expand_path, expand_path_with,
};
pub use jexpand_jpath::{JPathError, validate};
