//! Per-language capability providers
//!
//! Loaded once, shared read-only behind `Arc`. Any configured resource that
//! fails to load fails construction.

use std::path::Path;
use std::sync::Arc;

use corpus_prep_config::{PersianRules, Settings};
use corpus_prep_core::{Language, Lemmatizer, SpellChecker, Stemmer, WordTokenizer};

use crate::error::Result;
use crate::morphology::{create_lemmatizer, create_stemmer, create_tokenizer, StopwordSet};
use crate::spelling::{create_spell_checker, NoopSpellChecker};
use crate::tables::{LookupTable, LookupTables};

/// Everything the pipeline needs for one language
#[derive(Clone)]
pub struct LanguageResources {
    pub language: Language,
    pub tables: Arc<LookupTables>,
    pub spell_checker: Arc<dyn SpellChecker>,
    pub tokenizer: Arc<dyn WordTokenizer>,
    pub stemmer: Arc<dyn Stemmer>,
    pub lemmatizer: Arc<dyn Lemmatizer>,
    pub stopwords: Arc<StopwordSet>,
    pub emoji_placeholder: String,
    pub persian_rules: PersianRules,
}

impl LanguageResources {
    /// Built-in tables and providers, spelling correction disabled
    pub fn builtin(language: Language) -> Self {
        let placeholder = corpus_prep_config::LanguageSettings::default()
            .emoji_placeholder_for(language)
            .to_string();

        Self {
            language,
            tables: Arc::new(LookupTables::builtin()),
            spell_checker: Arc::new(NoopSpellChecker),
            tokenizer: create_tokenizer(language),
            stemmer: create_stemmer(language),
            lemmatizer: create_lemmatizer(language),
            stopwords: Arc::new(StopwordSet::builtin(language)),
            emoji_placeholder: placeholder,
            persian_rules: PersianRules::default(),
        }
    }

    /// Build from settings, loading every configured resource file
    pub fn from_settings(language: Language, settings: &Settings) -> Result<Self> {
        let section = settings.language(language);

        let mut tables = LookupTables::builtin();
        if let Some(path) = &section.substitutions_path {
            let table = LookupTable::from_toml_file("custom_substitutions", Path::new(path))?;
            tables = tables.with_table(language, table);
        }

        let stopwords = match &section.stopwords_path {
            Some(path) => StopwordSet::from_file(path)?,
            None => StopwordSet::builtin(language),
        };

        let spell_checker = create_spell_checker(&section.spelling, language)?;

        tracing::info!(
            language = %language,
            spelling = spell_checker.is_enabled(),
            stopwords = stopwords.len(),
            "Language resources ready"
        );

        Ok(Self {
            language,
            tables: Arc::new(tables),
            spell_checker,
            tokenizer: create_tokenizer(language),
            stemmer: create_stemmer(language),
            lemmatizer: create_lemmatizer(language),
            stopwords: Arc::new(stopwords),
            emoji_placeholder: section.emoji_placeholder_for(language).to_string(),
            persian_rules: settings.persian_rules.clone(),
        })
    }

    pub fn with_tables(mut self, tables: LookupTables) -> Self {
        self.tables = Arc::new(tables);
        self
    }

    pub fn with_spell_checker(mut self, checker: Arc<dyn SpellChecker>) -> Self {
        self.spell_checker = checker;
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn WordTokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = Arc::new(stopwords);
        self
    }

    pub fn with_emoji_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.emoji_placeholder = placeholder.into();
        self
    }

    pub fn with_persian_rules(mut self, rules: PersianRules) -> Self {
        self.persian_rules = rules;
        self
    }

    /// Apply this language's substitution chain
    pub fn apply_tables(&self, text: &str) -> String {
        self.tables.apply(self.language, text)
    }
}

impl std::fmt::Debug for LanguageResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageResources")
            .field("language", &self.language)
            .field("spelling", &self.spell_checker.is_enabled())
            .field("stopwords", &self.stopwords.len())
            .field("emoji_placeholder", &self.emoji_placeholder)
            .field("persian_rules", &self.persian_rules)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_placeholders() {
        assert_eq!(LanguageResources::builtin(Language::English).emoji_placeholder, "emoji");
        assert_eq!(LanguageResources::builtin(Language::Persian).emoji_placeholder, "[EMOJI]");
    }

    #[test]
    fn test_from_default_settings() {
        let settings = Settings::default();
        let resources = LanguageResources::from_settings(Language::English, &settings).unwrap();
        assert!(!resources.spell_checker.is_enabled());
        assert_eq!(resources.stopwords.len(), 179);
    }

    #[test]
    fn test_from_settings_loads_files() {
        let mut stopwords = tempfile::NamedTempFile::new().unwrap();
        writeln!(stopwords, "foo\nbar").unwrap();

        let mut substitutions = tempfile::NamedTempFile::new().unwrap();
        writeln!(substitutions, "[[substitution]]\nfrom = \"colour\"\nto = \"color\"").unwrap();

        let mut settings = Settings::default();
        settings.english.stopwords_path = Some(stopwords.path().display().to_string());
        settings.english.substitutions_path = Some(substitutions.path().display().to_string());
        settings.english.emoji_placeholder = Some("<emo>".to_string());

        let resources = LanguageResources::from_settings(Language::English, &settings).unwrap();
        assert_eq!(resources.stopwords.len(), 2);
        assert_eq!(resources.emoji_placeholder, "<emo>");
        assert_eq!(resources.apply_tables("nice colour"), "nice color");
    }

    #[test]
    fn test_missing_stopword_file_fails() {
        let mut settings = Settings::default();
        settings.persian.stopwords_path = Some("/nonexistent/stopwords-fa.txt".to_string());
        assert!(LanguageResources::from_settings(Language::Persian, &settings).is_err());
    }
}
