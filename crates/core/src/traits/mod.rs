//! Capability provider traits
//!
//! Providers are loaded once and shared read-only. All of them are
//! `Send + Sync` so callers may fan records out across threads.

mod text_processing;

pub use text_processing::{Lemmatizer, SpellChecker, Stemmer, WordTokenizer};
