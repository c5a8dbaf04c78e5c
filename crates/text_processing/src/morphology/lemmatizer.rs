//! Dictionary-plus-rules lemmatizers

use std::collections::HashMap;

use corpus_prep_core::{Lemmatizer, Stemmer};
use once_cell::sync::Lazy;

use super::stemmer::PersianStemmer;

/// Irregular English forms
static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("people", "person"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("oxen", "ox"),
        ("knives", "knife"),
        ("wives", "wife"),
        ("lives", "life"),
        ("leaves", "leaf"),
        ("wolves", "wolf"),
        ("halves", "half"),
        ("shelves", "shelf"),
        ("thieves", "thief"),
        ("loaves", "loaf"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        // verbs
        ("was", "be"),
        ("were", "be"),
        ("been", "be"),
        ("am", "be"),
        ("are", "be"),
        ("went", "go"),
        ("gone", "go"),
        ("did", "do"),
        ("done", "do"),
        ("had", "have"),
        ("has", "have"),
        ("ran", "run"),
        ("ate", "eat"),
        ("eaten", "eat"),
        ("saw", "see"),
        ("seen", "see"),
        ("took", "take"),
        ("taken", "take"),
        ("made", "make"),
        ("said", "say"),
        ("came", "come"),
        ("knew", "know"),
        ("known", "know"),
        ("thought", "think"),
        ("got", "get"),
        ("gave", "give"),
        ("given", "give"),
        ("found", "find"),
        ("told", "tell"),
        ("became", "become"),
        ("wrote", "write"),
        ("written", "write"),
        ("spoke", "speak"),
        ("spoken", "speak"),
    ]
    .into_iter()
    .collect()
});

/// Words that look plural but are not
const INVARIANT: &[&str] = &[
    "series",
    "species",
    "news",
    "always",
    "perhaps",
    "sometimes",
    "physics",
    "mathematics",
    "economics",
    "politics",
    "athletics",
    "means",
    "this",
    "its",
    "his",
    "hers",
    "ours",
    "yours",
    "theirs",
    "does",
    "is",
    "us",
    "as",
];

/// Rule-based English lemmatizer
///
/// Irregular noun and verb forms first, then regular plural rules. Tokens with any
/// non-alphabetic character pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLemmatizer;

impl EnglishLemmatizer {
    fn regular(word: &str) -> Option<String> {
        let len = word.chars().count();
        if len <= 3 {
            return None;
        }
        if let Some(stem) = word.strip_suffix("ies") {
            if len > 4 {
                return Some(format!("{}y", stem));
            }
            return None;
        }
        for suffix in ["sses", "xes", "zes", "ches", "shes"] {
            if word.ends_with(suffix) {
                return Some(word[..word.len() - 2].to_string());
            }
        }
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return None;
        }
        word.strip_suffix('s').map(str::to_string)
    }
}

impl Lemmatizer for EnglishLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        if token.is_empty() || !token.chars().all(|c| c.is_alphabetic()) {
            return token.to_string();
        }
        let lower = token.to_lowercase();
        if let Some(lemma) = IRREGULAR.get(lower.as_str()) {
            return lemma.to_string();
        }
        if INVARIANT.contains(&lower.as_str()) {
            return token.to_string();
        }
        Self::regular(token).unwrap_or_else(|| token.to_string())
    }
}

/// Persian lemmatizer
///
/// No dictionary is bundled, so lemmas are the affix-stripped stem.
#[derive(Debug, Clone, Default)]
pub struct PersianLemmatizer {
    stemmer: PersianStemmer,
}

impl PersianLemmatizer {
    pub fn new(stemmer: PersianStemmer) -> Self {
        Self { stemmer }
    }
}

impl Lemmatizer for PersianLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        self.stemmer.stem(token)
    }
}
