use serde::{Deserialize, Serialize};

/// What a trailing `#` produces when the value under it is an array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    /// Keep the `#` length marker unless the path already carries at least
    /// `auto_expand_depth` numeric tokens, in which case expand per index.
    #[default]
    Auto,
    /// Always keep the `#` length marker.
    Length,
    /// Always expand into one path per element.
    Expand,
}

/// Whether a terminal field segment is emitted when the field is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafPolicy {
    /// Emit the path whether or not the field exists.
    #[default]
    Always,
    /// Emit the path only when the field resolves in the document.
    Existing,
}

/// Configuration for a path expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpandOptions {
    pub length_mode: LengthMode,
    /// Numeric-token threshold used by `LengthMode::Auto`.
    pub auto_expand_depth: usize,
    pub leaf_policy: LeafPolicy,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            length_mode: LengthMode::Auto,
            auto_expand_depth: 3,
            leaf_policy: LeafPolicy::Always,
        }
    }
}

impl ExpandOptions {
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    pub fn with_auto_expand_depth(mut self, depth: usize) -> Self {
        self.auto_expand_depth = depth;
        self
    }

    pub fn with_leaf_policy(mut self, policy: LeafPolicy) -> Self {
        self.leaf_policy = policy;
        self
    }
}
