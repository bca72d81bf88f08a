use std::io;

/// A configuration document that does not match the schema.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{}{message}", path_prefix(.path))]
pub struct ConfigValidationError {
    /// Pointer-style location of the offending value, `""` for the root.
    pub path: String,
    pub message: String,
}

impl ConfigValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

fn path_prefix(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!("{}: ", path)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SquatError {
    #[error("config validation error: {0}")]
    Validation(#[from] ConfigValidationError),
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("malformed url {line:?}: {reason}")]
    MalformedUrl { line: String, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for SquatError {
    fn from(err: serde_json::Error) -> Self {
        SquatError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for SquatError {
    fn from(err: toml::de::Error) -> Self {
        SquatError::Parse(err.to_string())
    }
}
