//! Stopword sets

use std::collections::HashSet;
use std::path::Path;

use corpus_prep_core::Language;

use crate::error::{Result, TextProcessingError};

/// NLTK English stopword list
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Common Persian function words
const PERSIAN: &[&str] = &[
    "و", "در", "به", "از", "که", "این", "آن", "را", "با", "است", "برای", "تا", "یا", "هم", "نیز",
    "بر", "اما", "اگر", "چه", "هر", "یک", "ما", "من", "تو", "او", "شما", "آنها", "ایشان", "خود",
    "بود", "شد", "شود", "باشد", "کرد", "کند", "هست", "نیست", "بی", "پس", "چون", "ولی", "همه",
    "دیگر", "روی", "زیر", "میان", "بین", "پیش", "دو", "وی", "نه", "آیا", "کدام", "چرا",
];

/// Immutable set of stopwords for one language
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Built-in list for a language
    pub fn builtin(language: Language) -> Self {
        match language {
            Language::English => Self::new(ENGLISH),
            Language::Persian => Self::new(PERSIAN),
        }
    }

    /// Load one stopword per line; blank lines are skipped
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| TextProcessingError::ResourceLoad {
                path: path.display().to_string(),
                source,
            })?;
        let set = Self::new(content.lines());
        tracing::info!(path = %path.display(), count = set.len(), "Loaded stopwords");
        Ok(set)
    }

    /// Case-insensitive membership
    pub fn contains(&self, token: &str) -> bool {
        if self.words.contains(token) {
            return true;
        }
        let lower = token.to_lowercase();
        lower != token && self.words.contains(&lower)
    }

    /// Tokens that are not stopwords, in order
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_english() {
        let set = StopwordSet::builtin(Language::English);
        assert_eq!(set.len(), 179);
        assert!(set.contains("the"));
        assert!(set.contains("The"));
        assert!(set.contains("out"));
        assert!(!set.contains("hello"));
    }

    #[test]
    fn test_builtin_persian() {
        let set = StopwordSet::builtin(Language::Persian);
        assert!(set.contains("است"));
        assert!(!set.contains("کتاب"));
    }

    #[test]
    fn test_filter_keeps_order() {
        let set = StopwordSet::builtin(Language::English);
        let tokens = vec!["the", "cat", "is", "on", "mat"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(set.filter(tokens), vec!["cat", "mat"]);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "foo\n  Bar \n\nbaz").unwrap();

        let set = StopwordSet::from_file(file.path()).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("bar"));
        assert!(set.contains("BAR"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = StopwordSet::from_file("/nonexistent/stopwords.txt").unwrap_err();
        assert!(matches!(err, TextProcessingError::ResourceLoad { .. }));
    }
}
