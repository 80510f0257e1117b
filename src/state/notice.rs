use crate::error::{LoadError, ParseError};

/// A message waiting to be shown in a modal window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

impl From<&ParseError> for Notice {
    fn from(e: &ParseError) -> Self {
        Self {
            title: "Invalid Input",
            message: e.to_string(),
        }
    }
}

impl From<&LoadError> for Notice {
    fn from(e: &LoadError) -> Self {
        Self {
            title: "Error",
            message: e.to_string(),
        }
    }
}
