//! Language definitions
//!
//! The corpus is bilingual: every record pair carries an English side and a
//! Persian side, and each side runs its own pipeline variant.

use serde::{Deserialize, Serialize};

/// Supported corpus languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Persian,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Persian => "fa",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Persian => "Persian",
        }
    }

    /// Sentence-final punctuation, detached as separate words by punctuation
    /// cleaning
    pub fn sentence_terminators(&self) -> &'static [char] {
        match self {
            Self::English => &['.', '?', '!'],
            Self::Persian => &['.', '?', '!', '؟'],
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Self::English, Self::Persian]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
