use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while *loading* a flat map or configuring the tooling.
///
/// Decoding itself never fails; these only surface at the outer edges.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("value for key '{key}' is not a string")]
    NonStringValue { key: String },

    #[error("line {line}: expected `key=value`")]
    MalformedLine { line: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}
