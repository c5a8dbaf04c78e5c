//! No-op spell checker

use corpus_prep_core::SpellChecker;

/// Pass-through checker used when no dictionary is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpellChecker;

impl SpellChecker for NoopSpellChecker {
    fn correct(&self, _word: &str) -> Option<String> {
        None
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
