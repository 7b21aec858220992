use serde_json::Value;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A key along a path was absent from the mapping being walked.
    #[error("key not found: '{0}'")]
    KeyNotFound(String),

    /// A key was looked up in something that is not a JSON object.
    #[error("cannot look up '{key}' in a {found}, expected an object")]
    NotAMapping { key: String, found: &'static str },

    #[error("`{field}` should be {expected}, got {found}")]
    UnexpectedType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// The key a failed traversal was trying to reach, if this is a lookup failure.
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            Error::KeyNotFound(key) | Error::NotAMapping { key, .. } => Some(key),
            _ => None,
        }
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
