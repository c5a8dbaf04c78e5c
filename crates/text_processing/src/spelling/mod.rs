//! Spelling correction providers
//!
//! A SymSpell frequency dictionary when one is configured, otherwise a
//! pass-through checker.

mod noop;
mod symspell_checker;

pub use noop::NoopSpellChecker;
pub use symspell_checker::SymSpellChecker;

use std::sync::Arc;

use corpus_prep_config::SpellingSettings;
use corpus_prep_core::{Language, SpellChecker};

use crate::error::Result;

/// Create the spell checker for a language
///
/// A configured dictionary that cannot be read is an error; no dictionary at
/// all disables correction.
pub fn create_spell_checker(
    settings: &SpellingSettings,
    language: Language,
) -> Result<Arc<dyn SpellChecker>> {
    match &settings.dictionary_path {
        Some(path) => Ok(Arc::new(SymSpellChecker::from_file(path, settings)?)),
        None => {
            tracing::warn!(
                language = %language,
                "No spelling dictionary configured, correction disabled"
            );
            Ok(Arc::new(NoopSpellChecker))
        }
    }
}

/// Replace each whitespace-separated word with its correction, if any
///
/// Token count and order are preserved; whitespace runs become single spaces.
pub fn correct_spelling(text: &str, checker: &dyn SpellChecker) -> String {
    text.split_whitespace()
        .map(|word| checker.correct(word).unwrap_or_else(|| word.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_dictionary_is_noop() {
        let checker = create_spell_checker(&SpellingSettings::default(), Language::English).unwrap();
        assert!(!checker.is_enabled());
        assert_eq!(checker.correct("helo"), None);
    }

    #[test]
    fn test_dictionary_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hello 1000\nworld 800").unwrap();

        let settings = SpellingSettings {
            dictionary_path: Some(file.path().display().to_string()),
            ..Default::default()
        };
        let checker = create_spell_checker(&settings, Language::English).unwrap();
        assert!(checker.is_enabled());
        assert_eq!(checker.correct("helo"), Some("hello".to_string()));
    }

    #[test]
    fn test_correct_spelling_keeps_token_count() {
        let checker = SymSpellChecker::from_entries(
            [("hello", 1000), ("world", 800)],
            &SpellingSettings::default(),
        )
        .unwrap();
        assert_eq!(correct_spelling("helo  wrld !", &checker), "hello world !");
        assert_eq!(correct_spelling("", &checker), "");
    }

    #[test]
    fn test_missing_dictionary_is_error() {
        let settings = SpellingSettings {
            dictionary_path: Some("/nonexistent/frequency.txt".to_string()),
            ..Default::default()
        };
        assert!(create_spell_checker(&settings, Language::English).is_err());
    }
}
