//! Stemmers
//!
//! English uses the Snowball (Porter2) algorithm from `rust-stemmers`.
//! Persian strips a fixed set of plural, possessive and comparative suffixes
//! plus the continuous-verb prefixes.

use corpus_prep_config::constants::persian::MIN_STEM_LENGTH;
use corpus_prep_core::Stemmer;
use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};

/// Snowball English stemmer
pub struct EnglishStemmer {
    inner: SnowballStemmer,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self {
            inner: SnowballStemmer::create(Algorithm::English),
        }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnglishStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishStemmer").finish_non_exhaustive()
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}

/// Longest first so `هایشان` wins over `ها`
const PERSIAN_SUFFIXES: &[&str] = &[
    "هایمان", "هایتان", "هایشان", "هایم", "هایت", "هایش", "هایی", "ترین", "های", "ها", "تر",
];

const PERSIAN_PREFIXES: &[&str] = &["نمی", "می"];

/// Rule-based Persian stemmer
#[derive(Debug, Clone)]
pub struct PersianStemmer {
    min_stem_length: usize,
}

impl PersianStemmer {
    pub fn new(min_stem_length: usize) -> Self {
        Self { min_stem_length }
    }

    fn strip_suffix<'a>(&self, token: &'a str) -> &'a str {
        for suffix in PERSIAN_SUFFIXES {
            if let Some(stem) = token.strip_suffix(suffix) {
                if stem.chars().count() >= self.min_stem_length {
                    return stem;
                }
            }
        }
        token
    }

    fn strip_prefix<'a>(&self, token: &'a str) -> &'a str {
        for prefix in PERSIAN_PREFIXES {
            if let Some(stem) = token.strip_prefix(prefix) {
                let stem = stem.trim_start_matches('\u{200C}');
                if stem.chars().count() > self.min_stem_length {
                    return stem;
                }
            }
        }
        token
    }
}

impl Default for PersianStemmer {
    fn default() -> Self {
        Self::new(MIN_STEM_LENGTH)
    }
}

impl Stemmer for PersianStemmer {
    fn stem(&self, token: &str) -> String {
        let token = self.strip_suffix(token);
        self.strip_prefix(token).to_string()
    }
}
