use std::path::PathBuf;
use thiserror::Error;

/// A single token that is neither an integer nor a real number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{token}' is not a valid number.")]
pub struct ParseError {
    pub token: String,
}

impl ParseError {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened, or reading it failed partway through.
    #[error("Failed to read file: {source} ({})", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Read { path: path.into(), source }
    }
}
