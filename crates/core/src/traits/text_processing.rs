//! Text processing traits

/// Single-word spelling correction
///
/// Implementations:
/// - `SymSpellChecker` - frequency dictionary lookup
/// - `NoopSpellChecker` - pass-through (no dictionary configured)
///
/// # Example
///
/// ```ignore
/// let checker: Arc<dyn SpellChecker> = create_spell_checker(&config)?;
/// assert_eq!(checker.correct("helo"), Some("hello".to_string()));
/// assert_eq!(checker.correct("hello"), None);
/// ```
pub trait SpellChecker: Send + Sync + 'static {
    /// Best correction for an unknown word
    ///
    /// # Returns
    /// `None` when the word is known or no candidate exists
    fn correct(&self, word: &str) -> Option<String>;

    /// Check if checker is enabled
    fn is_enabled(&self) -> bool;
}

/// Word tokenization
pub trait WordTokenizer: Send + Sync + 'static {
    /// Split text into tokens, preserving order
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Stemming: one token in, one token out
pub trait Stemmer: Send + Sync + 'static {
    fn stem(&self, token: &str) -> String;
}

/// Lemmatization: one token in, one token out
pub trait Lemmatizer: Send + Sync + 'static {
    fn lemmatize(&self, token: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct MockChecker;

    impl SpellChecker for MockChecker {
        fn correct(&self, word: &str) -> Option<String> {
            (word == "helo").then(|| "hello".to_string())
        }

        fn is_enabled(&self) -> bool {
            true
        }
    }

    struct UpperStemmer;

    impl Stemmer for UpperStemmer {
        fn stem(&self, token: &str) -> String {
            token.to_uppercase()
        }
    }

    #[test]
    fn test_mock_checker() {
        let checker: Arc<dyn SpellChecker> = Arc::new(MockChecker);
        assert_eq!(checker.correct("helo").as_deref(), Some("hello"));
        assert_eq!(checker.correct("hello"), None);
        assert!(checker.is_enabled());
    }

    #[test]
    fn test_providers_are_shareable() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SpellChecker>();
        assert_send_sync::<dyn WordTokenizer>();
        assert_send_sync::<dyn Stemmer>();
        assert_send_sync::<dyn Lemmatizer>();
        assert_eq!(UpperStemmer.stem("ab"), "AB");
    }
}
