//! Loading `ExpandOptions` from JSON configuration files.
//!
//! ```json
//! { "length_mode": "auto", "auto_expand_depth": 3, "leaf_policy": "always" }
//! ```
//!
//! Missing fields take their defaults; unknown fields are rejected.
//! Command-line flags are layered on top with `OptionOverrides`.

use crate::error::JexpandError;
use jexpand_engine::{ExpandOptions, LeafPolicy, LengthMode};
use std::fs;
use std::path::Path;

/// Option values given explicitly, e.g. on the command line. Each one that
/// is set replaces the value from the configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub length_mode: Option<LengthMode>,
    pub auto_expand_depth: Option<usize>,
    pub leaf_policy: Option<LeafPolicy>,
}

impl OptionOverrides {
    pub fn apply(self, mut options: ExpandOptions) -> ExpandOptions {
        if let Some(mode) = self.length_mode {
            options = options.with_length_mode(mode);
        }
        if let Some(depth) = self.auto_expand_depth {
            options = options.with_auto_expand_depth(depth);
        }
        if let Some(leaf) = self.leaf_policy {
            options = options.with_leaf_policy(leaf);
        }
        options
    }
}

/// Loads `config` when given (defaults otherwise) and applies `overrides`.
pub fn resolve_options(
    config: Option<&Path>,
    overrides: OptionOverrides,
) -> Result<ExpandOptions, JexpandError> {
    let base = match config {
        Some(path) => load_options(path)?,
        None => ExpandOptions::default(),
    };
    Ok(overrides.apply(base))
}

pub fn load_options(path: impl AsRef<Path>) -> Result<ExpandOptions, JexpandError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let options = parse_options(&text).map_err(|source| JexpandError::Config {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("Loaded expansion options from {}: {:?}", path.display(), options);
    Ok(options)
}

pub fn parse_options(text: &str) -> Result<ExpandOptions, serde_json::Error> {
    serde_json::from_str(text)
}
