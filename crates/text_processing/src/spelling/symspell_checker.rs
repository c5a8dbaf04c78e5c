//! SymSpell-backed spell checker

use std::path::Path;

use corpus_prep_config::constants::spelling::PREFIX_LENGTH;
use corpus_prep_config::SpellingSettings;
use corpus_prep_core::SpellChecker;
use symspell::{SymSpell, SymSpellBuilder, UnicodeStringStrategy, Verbosity};

use crate::error::{Result, TextProcessingError};

/// `term<sep>count` with a non-empty term and an integer count
fn is_dictionary_line(line: &str, separator: &str) -> bool {
    let mut parts = line.split(separator);
    let term = parts.next().unwrap_or_default();
    let count = parts.next().unwrap_or_default();
    !term.is_empty() && count.trim().parse::<i64>().is_ok()
}

/// Frequency-dictionary spell checker
///
/// Only alphabetic words of at least `min_word_length` characters are looked
/// up. A word found with distance 0 is already correct.
pub struct SymSpellChecker {
    symspell: SymSpell<UnicodeStringStrategy>,
    max_edit_distance: i64,
    min_word_length: usize,
    terms: usize,
}

impl SymSpellChecker {
    fn build(source: &str, settings: &SpellingSettings) -> Result<SymSpell<UnicodeStringStrategy>> {
        SymSpellBuilder::default()
            .max_dictionary_edit_distance(settings.max_edit_distance)
            .prefix_length(PREFIX_LENGTH)
            .build()
            .map_err(|e| TextProcessingError::InvalidDictionary {
                path: source.to_string(),
                message: e.to_string(),
            })
    }

    /// Load a `term<sep>count` dictionary file
    pub fn from_file(path: impl AsRef<Path>, settings: &SpellingSettings) -> Result<Self> {
        let path = path.as_ref();
        let dictionary = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|source| TextProcessingError::ResourceLoad {
                path: dictionary.clone(),
                source,
            })?;

        let mut symspell = Self::build(&dictionary, settings)?;
        let mut terms = 0;
        for line in content.lines().map(str::trim) {
            if is_dictionary_line(line, &settings.separator)
                && symspell.load_dictionary_line(line, 0, 1, &settings.separator)
            {
                terms += 1;
            }
        }
        if terms == 0 {
            return Err(TextProcessingError::InvalidDictionary {
                path: dictionary,
                message: "no valid `term count` lines".to_string(),
            });
        }

        tracing::info!(
            path = %dictionary,
            terms,
            max_edit_distance = settings.max_edit_distance,
            "Loaded spelling dictionary"
        );

        Ok(Self {
            symspell,
            max_edit_distance: settings.max_edit_distance,
            min_word_length: settings.min_word_length,
            terms,
        })
    }

    /// Build from in-memory `(term, count)` pairs
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, u64)>,
        settings: &SpellingSettings,
    ) -> Result<Self> {
        let mut symspell = Self::build("<memory>", settings)?;
        let mut terms = 0;
        for (term, count) in entries {
            let line = format!("{},{}", term.to_lowercase(), count);
            if is_dictionary_line(&line, ",") && symspell.load_dictionary_line(&line, 0, 1, ",") {
                terms += 1;
            }
        }

        Ok(Self {
            symspell,
            max_edit_distance: settings.max_edit_distance,
            min_word_length: settings.min_word_length,
            terms,
        })
    }

    /// Number of dictionary terms loaded
    pub fn len(&self) -> usize {
        self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms == 0
    }
}

impl std::fmt::Debug for SymSpellChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymSpellChecker")
            .field("terms", &self.terms)
            .field("max_edit_distance", &self.max_edit_distance)
            .field("min_word_length", &self.min_word_length)
            .finish()
    }
}

impl SpellChecker for SymSpellChecker {
    fn correct(&self, word: &str) -> Option<String> {
        if word.chars().count() < self.min_word_length || !word.chars().all(char::is_alphabetic) {
            return None;
        }

        let lower = word.to_lowercase();
        self.symspell
            .lookup(&lower, Verbosity::Top, self.max_edit_distance)
            .into_iter()
            .next()
            .filter(|s| s.distance > 0)
            .map(|s| s.term)
    }

    fn is_enabled(&self) -> bool {
        true
    }
}
