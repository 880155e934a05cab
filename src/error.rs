// src/error.rs
use jexpand_engine::ExpandError;
use thiserror::Error;

/// Errors surfaced by the integration layer and the command-line tool.
#[derive(Error, Debug)]
pub enum JexpandError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration in '{path}': {source}")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expansion failed: {0}")]
    Expand(#[from] ExpandError),

    #[error("Failed to write JSON output: {0}")]
    Output(#[from] serde_json::Error),
}
