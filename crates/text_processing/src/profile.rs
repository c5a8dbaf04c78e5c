//! Task profile registry
//!
//! Each [`TaskKind`] maps to a fixed set of stage toggles shared by both
//! languages. Stage order is owned by the pipeline; a profile only decides
//! which stages run.

use corpus_prep_config::StageOverrides;
use corpus_prep_core::{EmojiStrategy, TaskKind};
use serde::{Deserialize, Serialize};

/// Stage toggles for one task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskProfile {
    pub task: TaskKind,
    pub lowercase: bool,
    pub normalize_unicode: bool,
    pub remove_accents: bool,
    pub handle_emojis: EmojiStrategy,
    pub correct_spelling: bool,
    pub remove_url_html: bool,
    pub remove_social_elements: bool,
    pub apply_dictionary_replacements: bool,
    pub separate_alnum: bool,
    pub clean_punctuation: bool,
    pub remove_numbers_only: bool,
    pub convert_numbers_to_words: bool,
    pub tokenize: bool,
    pub remove_stopwords: bool,
    pub apply_stemming: bool,
    pub apply_lemmatization: bool,
    pub collapse_whitespace: bool,
}

impl TaskProfile {
    /// Full cleaning for general-purpose corpora
    const DEFAULT: Self = Self {
        task: TaskKind::Default,
        lowercase: true,
        normalize_unicode: true,
        remove_accents: true,
        handle_emojis: EmojiStrategy::Replace,
        correct_spelling: true,
        remove_url_html: true,
        remove_social_elements: true,
        apply_dictionary_replacements: true,
        separate_alnum: true,
        clean_punctuation: true,
        remove_numbers_only: true,
        convert_numbers_to_words: true,
        tokenize: true,
        remove_stopwords: true,
        apply_stemming: false,
        apply_lemmatization: true,
        collapse_whitespace: true,
    };

    /// Light touch: keep wording and punctuation for alignment
    const TRANSLATION: Self = Self {
        task: TaskKind::Translation,
        remove_accents: false,
        handle_emojis: EmojiStrategy::Off,
        correct_spelling: false,
        apply_dictionary_replacements: false,
        separate_alnum: false,
        remove_numbers_only: false,
        convert_numbers_to_words: false,
        tokenize: false,
        remove_stopwords: false,
        apply_lemmatization: false,
        ..Self::DEFAULT
    };

    const SENTIMENT: Self = Self {
        task: TaskKind::Sentiment,
        handle_emojis: EmojiStrategy::Sentiment,
        convert_numbers_to_words: false,
        ..Self::DEFAULT
    };

    /// Keep every word form and number intact for entity spans
    const NER: Self = Self {
        task: TaskKind::Ner,
        handle_emojis: EmojiStrategy::Off,
        correct_spelling: false,
        remove_numbers_only: false,
        convert_numbers_to_words: false,
        remove_stopwords: false,
        apply_lemmatization: false,
        ..Self::DEFAULT
    };

    const TOPIC_MODELING: Self = Self {
        task: TaskKind::TopicModeling,
        handle_emojis: EmojiStrategy::Off,
        correct_spelling: false,
        convert_numbers_to_words: false,
        apply_stemming: true,
        ..Self::DEFAULT
    };

    const SPAM_DETECTION: Self = Self {
        task: TaskKind::SpamDetection,
        handle_emojis: EmojiStrategy::Off,
        remove_numbers_only: false,
        convert_numbers_to_words: false,
        ..Self::DEFAULT
    };

    const SUMMARIZATION: Self = Self {
        task: TaskKind::Summarization,
        handle_emojis: EmojiStrategy::Off,
        correct_spelling: false,
        remove_numbers_only: false,
        convert_numbers_to_words: false,
        remove_stopwords: false,
        ..Self::DEFAULT
    };

    /// Registry lookup
    pub const fn for_task(task: TaskKind) -> Self {
        match task {
            TaskKind::Default => Self::DEFAULT,
            TaskKind::Translation => Self::TRANSLATION,
            TaskKind::Sentiment => Self::SENTIMENT,
            TaskKind::Ner => Self::NER,
            TaskKind::TopicModeling => Self::TOPIC_MODELING,
            TaskKind::SpamDetection => Self::SPAM_DETECTION,
            TaskKind::Summarization => Self::SUMMARIZATION,
        }
    }

    /// Resolve a task name, falling back to `default` for unknown names
    pub fn resolve(name: &str) -> Self {
        match TaskKind::from_name(name) {
            Some(task) => Self::for_task(task),
            None => {
                tracing::warn!(task = name, "Unknown task name, using default profile");
                Self::DEFAULT
            }
        }
    }

    /// Apply per-stage overrides from settings
    pub fn with_overrides(mut self, overrides: &StageOverrides) -> Self {
        fn set(target: &mut bool, value: Option<bool>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut self.lowercase, overrides.lowercase);
        set(&mut self.normalize_unicode, overrides.normalize_unicode);
        set(&mut self.remove_accents, overrides.remove_accents);
        if let Some(strategy) = overrides.handle_emojis {
            self.handle_emojis = strategy;
        }
        set(&mut self.correct_spelling, overrides.correct_spelling);
        set(&mut self.remove_url_html, overrides.remove_url_html);
        set(&mut self.remove_social_elements, overrides.remove_social_elements);
        set(
            &mut self.apply_dictionary_replacements,
            overrides.apply_dictionary_replacements,
        );
        set(&mut self.separate_alnum, overrides.separate_alnum);
        set(&mut self.clean_punctuation, overrides.clean_punctuation);
        set(&mut self.remove_numbers_only, overrides.remove_numbers_only);
        set(&mut self.convert_numbers_to_words, overrides.convert_numbers_to_words);
        set(&mut self.tokenize, overrides.tokenize);
        set(&mut self.remove_stopwords, overrides.remove_stopwords);
        set(&mut self.apply_stemming, overrides.apply_stemming);
        set(&mut self.apply_lemmatization, overrides.apply_lemmatization);
        set(&mut self.collapse_whitespace, overrides.collapse_whitespace);
        self
    }
}

impl Default for TaskProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<TaskKind> for TaskProfile {
    fn from(task: TaskKind) -> Self {
        Self::for_task(task)
    }
}
