//! Core traits and types for the corpus normalization pipeline
//!
//! This crate provides foundational types used across all other crates:
//! - Language definitions (English, Persian)
//! - Task kinds and emoji strategies selecting a pipeline variant
//! - Input cells and the `Text` value threaded through the executor
//! - Capability provider traits (spelling, tokenization, stemming, lemmatization)
//! - Error types

pub mod error;
pub mod language;
pub mod task;
pub mod text;
pub mod traits;

pub use error::{Error, Result};
pub use language::Language;
pub use task::{EmojiStrategy, TaskKind};
pub use text::{Cell, Text};

pub use traits::{Lemmatizer, SpellChecker, Stemmer, WordTokenizer};
