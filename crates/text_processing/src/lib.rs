//! Task-driven text normalization for English/Persian parallel corpora
//!
//! This crate provides:
//! - **Lookup Tables**: ordered literal substitution chains per language
//! - **Stages**: pure `&str -> String` normalization functions
//! - **Spelling / Morphology**: SymSpell correction, tokenizers, stemmers,
//!   lemmatizers and stopword sets behind the core provider traits
//! - **Task Profiles**: which stages run for each downstream task
//! - **Pipeline**: fixed per-language stage order applied to each record
//!
//! # Example
//!
//! ```ignore
//! use corpus_prep_text_processing::CorpusNormalizer;
//!
//! let settings = corpus_prep_config::load_settings(None)?;
//! let normalizer = CorpusNormalizer::from_settings(&settings)?;
//!
//! let (english, persian) = normalizer.process_columns(&english_cells, &persian_cells);
//! ```

pub mod morphology;
pub mod pipeline;
pub mod profile;
pub mod resources;
pub mod spelling;
pub mod stages;
pub mod tables;

mod error;
mod normalizer;

pub use error::{Result, TextProcessingError};
pub use normalizer::{CorpusNormalizer, Normalizer};
pub use pipeline::{process, process_text, process_traced, ProcessedText, ProcessingStep};
pub use profile::TaskProfile;
pub use resources::LanguageResources;

pub use morphology::{
    EnglishLemmatizer, EnglishStemmer, EnglishTokenizer, PersianLemmatizer, PersianStemmer,
    PersianTokenizer, StopwordSet,
};
pub use spelling::{create_spell_checker, NoopSpellChecker, SymSpellChecker};
pub use tables::{LookupTable, LookupTables};
