use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyledictError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in file {file}: {message}")]
    ParseError { file: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),

    #[error("Unknown transform: {0}")]
    UnknownTransform(String),

    #[error("Unknown transform group: {0}")]
    UnknownTransformGroup(String),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Circular reference detected: {0}")]
    CircularReference(String),

    #[error("Unresolved reference {reference} in token {token}")]
    UnresolvedReference { reference: String, token: String },

    #[error("Invalid token value for {token}: {message}")]
    InvalidValue { token: String, message: String },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

impl From<globwalk::GlobError> for StyledictError {
    fn from(err: globwalk::GlobError) -> Self {
        StyledictError::InvalidPattern(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StyledictError>;

impl StyledictError {
    pub fn parse_error(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        StyledictError::ParseError {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        StyledictError::Config(message.into())
    }

    pub fn unknown_transform(name: impl Into<String>) -> Self {
        StyledictError::UnknownTransform(name.into())
    }

    pub fn unknown_format(name: impl Into<String>) -> Self {
        StyledictError::UnknownFormat(name.into())
    }

    pub fn unknown_platform(name: impl Into<String>) -> Self {
        StyledictError::UnknownPlatform(name.into())
    }

    pub fn circular_reference(message: impl Into<String>) -> Self {
        StyledictError::CircularReference(message.into())
    }

    pub fn unresolved_reference(reference: impl Into<String>, token: impl Into<String>) -> Self {
        StyledictError::UnresolvedReference {
            reference: reference.into(),
            token: token.into(),
        }
    }

    pub fn invalid_value(token: impl Into<String>, message: impl Into<String>) -> Self {
        StyledictError::InvalidValue {
            token: token.into(),
            message: message.into(),
        }
    }
}
