//! Tokenization, stopwords, stemming and lemmatization providers

mod lemmatizer;
mod stemmer;
mod stopwords;
mod tokenizer;

pub use lemmatizer::{EnglishLemmatizer, PersianLemmatizer};
pub use stemmer::{EnglishStemmer, PersianStemmer};
pub use stopwords::StopwordSet;
pub use tokenizer::{EnglishTokenizer, PersianTokenizer};

use corpus_prep_core::{Language, Lemmatizer, Stemmer, WordTokenizer};
use std::sync::Arc;

/// Default tokenizer for a language
pub fn create_tokenizer(language: Language) -> Arc<dyn WordTokenizer> {
    match language {
        Language::English => Arc::new(EnglishTokenizer),
        Language::Persian => Arc::new(PersianTokenizer),
    }
}

/// Default stemmer for a language
pub fn create_stemmer(language: Language) -> Arc<dyn Stemmer> {
    match language {
        Language::English => Arc::new(EnglishStemmer::new()),
        Language::Persian => Arc::new(PersianStemmer::default()),
    }
}

/// Default lemmatizer for a language
pub fn create_lemmatizer(language: Language) -> Arc<dyn Lemmatizer> {
    match language {
        Language::English => Arc::new(EnglishLemmatizer),
        Language::Persian => Arc::new(PersianLemmatizer::default()),
    }
}
