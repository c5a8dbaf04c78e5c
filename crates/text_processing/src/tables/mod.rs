//! Lookup tables for dictionary substitution
//!
//! A table is an ordered list of literal `pattern -> replacement` pairs.
//! Tables are chained per language and applied in declared order:
//!
//! - English: contractions, Latin letter variants, signs, special characters
//! - Persian: signs, Arabic letter variants, digits, Latin letter variants,
//!   special characters
//!
//! The built-in chains are fixed points: applying a chain to its own output
//! changes nothing. Tables are plain values so callers and tests can swap in
//! their own.

mod common;
pub mod english;
pub mod persian;

use corpus_prep_core::Language;
use serde::Deserialize;
use std::path::Path;

use crate::{Result, TextProcessingError};

/// Ordered literal substitution table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    name: String,
    entries: Vec<(String, String)>,
}

impl LookupTable {
    /// Build a table, keeping the first entry for any repeated key
    pub fn new(name: impl Into<String>, entries: Vec<(String, String)>) -> Self {
        let mut unique: Vec<(String, String)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            if key.is_empty() || unique.iter().any(|(k, _)| *k == key) {
                continue;
            }
            unique.push((key, value));
        }
        Self {
            name: name.into(),
            entries: unique,
        }
    }

    /// Build a table from a static entry list
    pub fn from_static(name: &str, entries: &[(&str, &str)]) -> Self {
        Self::new(
            name,
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// Load extra substitutions from a TOML file
    ///
    /// ```toml
    /// [[substitution]]
    /// from = "colour"
    /// to = "color"
    /// ```
    pub fn from_toml_file(name: &str, path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| TextProcessingError::ResourceLoad {
                path: path.display().to_string(),
                source,
            })?;

        let file: SubstitutionFile =
            toml::from_str(&content).map_err(|e| TextProcessingError::InvalidDictionary {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        if let Some(pos) = file.substitution.iter().position(|s| s.from.is_empty()) {
            return Err(TextProcessingError::InvalidDictionary {
                path: path.display().to_string(),
                message: format!("substitution #{} has an empty `from`", pos + 1),
            });
        }

        let table = Self::new(
            name,
            file.substitution
                .into_iter()
                .map(|s| (s.from, s.to))
                .collect(),
        );
        tracing::info!(
            path = %path.display(),
            entries = table.len(),
            "Loaded custom substitutions"
        );
        Ok(table)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace every occurrence of every key, entries in declared order
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (key, value) in &self.entries {
            if out.contains(key.as_str()) {
                out = out.replace(key.as_str(), value);
            }
        }
        out
    }
}

#[derive(Debug, Deserialize)]
struct SubstitutionFile {
    #[serde(default)]
    substitution: Vec<Substitution>,
}

#[derive(Debug, Deserialize)]
struct Substitution {
    from: String,
    #[serde(default)]
    to: String,
}

/// Per-language table chains
#[derive(Debug, Clone)]
pub struct LookupTables {
    english: Vec<LookupTable>,
    persian: Vec<LookupTable>,
}

impl LookupTables {
    pub fn new(english: Vec<LookupTable>, persian: Vec<LookupTable>) -> Self {
        Self { english, persian }
    }

    /// Built-in chains for both languages
    pub fn builtin() -> Self {
        Self {
            english: english::tables(),
            persian: persian::tables(),
        }
    }

    /// Append a table to the end of one language's chain
    pub fn with_table(mut self, language: Language, table: LookupTable) -> Self {
        match language {
            Language::English => self.english.push(table),
            Language::Persian => self.persian.push(table),
        }
        self
    }

    pub fn chain(&self, language: Language) -> &[LookupTable] {
        match language {
            Language::English => &self.english,
            Language::Persian => &self.persian,
        }
    }

    /// Run the full chain for a language
    pub fn apply(&self, language: Language, text: &str) -> String {
        self.chain(language)
            .iter()
            .fold(text.to_string(), |acc, table| table.apply(&acc))
    }
}

impl Default for LookupTables {
    fn default() -> Self {
        Self::builtin()
    }
}
