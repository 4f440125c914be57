//! Per-file generation errors. Every variant carries the path it
//! happened on so batch reporting stays useful.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{path}: failed to read source file: {source}", path = .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: failed to parse JSON: {source}", path = .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The top-level JSON value was not an object; only a mapping can
    /// supply a field list.
    #[error("{path}: invalid schema kind: top-level JSON value is {found}, expected an object", path = .path.display())]
    InvalidSchemaKind { path: PathBuf, found: &'static str },

    #[error("{path}: failed to write generated source: {source}", path = .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Raised after a successful write; the generated file stays in
    /// place, so this is noisy but not lossy.
    #[error("{path}: failed to delete source file after generation: {source}", path = .path.display())]
    Delete {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Human-readable kind name for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
