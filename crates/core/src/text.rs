//! Input cells and the text value threaded through a pipeline

use serde::{Deserialize, Serialize};

/// A single input cell from a corpus column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Numeric(f64),
    Missing,
}

impl Cell {
    /// Text content of the cell
    ///
    /// Non-text cells carry nothing to normalize and yield `None`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Numeric(_) | Self::Missing => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Numeric(n)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Missing)
    }
}

/// Text at some point in a pipeline: either a raw string or a token sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    Raw(String),
    Tokens(Vec<String>),
}

impl Text {
    /// Join into a single string, tokens separated by one space
    pub fn join(self) -> String {
        match self {
            Self::Raw(s) => s,
            Self::Tokens(tokens) => tokens.join(" "),
        }
    }

    /// Borrowing variant of [`Text::join`]
    pub fn to_joined(&self) -> String {
        match self {
            Self::Raw(s) => s.clone(),
            Self::Tokens(tokens) => tokens.join(" "),
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::Raw(String::new())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<Vec<String>> for Text {
    fn from(tokens: Vec<String>) -> Self {
        Self::Tokens(tokens)
    }
}
