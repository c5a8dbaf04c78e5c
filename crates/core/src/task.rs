//! Task kinds and emoji strategies
//!
//! A task kind names the downstream NLP model a corpus is being prepared
//! for. The set is closed; anything else resolves to [`TaskKind::Default`].

use serde::{Deserialize, Serialize};

/// Downstream task a corpus is normalized for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    #[default]
    Default,
    Translation,
    Sentiment,
    Ner,
    TopicModeling,
    SpamDetection,
    Summarization,
}

impl TaskKind {
    /// Registry key for this task
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Translation => "translation",
            Self::Sentiment => "sentiment",
            Self::Ner => "ner",
            Self::TopicModeling => "topic_modeling",
            Self::SpamDetection => "spam_detection",
            Self::Summarization => "summarization",
        }
    }

    /// Look up a task by its registry key
    ///
    /// Returns `None` for names outside the closed set; callers that need the
    /// fallback behaviour use [`TaskKind::resolve`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "translation" => Some(Self::Translation),
            "sentiment" => Some(Self::Sentiment),
            "ner" => Some(Self::Ner),
            "topic_modeling" => Some(Self::TopicModeling),
            "spam_detection" => Some(Self::SpamDetection),
            "summarization" => Some(Self::Summarization),
            _ => None,
        }
    }

    /// Look up a task, falling back to `Default` for unknown names
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// Get all task kinds
    pub fn all() -> &'static [TaskKind] {
        &[
            Self::Default,
            Self::Translation,
            Self::Sentiment,
            Self::Ner,
            Self::TopicModeling,
            Self::SpamDetection,
            Self::Summarization,
        ]
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How the emoji stage treats emoji
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmojiStrategy {
    /// Stage disabled, emoji pass through
    #[default]
    Off,
    /// Delete every emoji
    Remove,
    /// Substitute a textual placeholder per emoji
    Replace,
    /// Map a small closed set of emoji to sentiment words
    Sentiment,
}

impl EmojiStrategy {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Off)
    }
}
