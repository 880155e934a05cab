use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpandError {
    /// The document bytes are not valid JSON. A valid document with no
    /// matching paths is not an error.
    #[error("Invalid JSON document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}
