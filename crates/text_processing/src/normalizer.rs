//! Column-level normalizers
//!
//! `Normalizer` binds one language's resources to a task profile;
//! `CorpusNormalizer` holds the English and Persian sides of a parallel
//! corpus built from one `Settings`.

use corpus_prep_config::{Settings, StageOverrides};
use corpus_prep_core::{Cell, Language, TaskKind};

use crate::error::Result;
use crate::pipeline::{self, ProcessedText};
use crate::profile::TaskProfile;
use crate::resources::LanguageResources;

/// Normalizer for one language and task
#[derive(Debug, Clone)]
pub struct Normalizer {
    profile: TaskProfile,
    resources: LanguageResources,
    metrics_enabled: bool,
}

impl Normalizer {
    pub fn new(profile: TaskProfile, resources: LanguageResources) -> Self {
        Self {
            profile,
            resources,
            metrics_enabled: false,
        }
    }

    /// Built-in resources for a task name; unknown names use `default`
    pub fn for_task(language: Language, task: &str) -> Self {
        Self::new(
            TaskProfile::resolve(task),
            LanguageResources::builtin(language),
        )
    }

    /// Build from settings: task, overrides and language resources
    pub fn from_settings(language: Language, settings: &Settings) -> Result<Self> {
        let ignored = ignored_overrides(language, &settings.overrides);
        if !ignored.is_empty() {
            tracing::debug!(
                language = %language,
                stages = ?ignored,
                "Stage overrides have no effect for this language"
            );
        }
        let profile = TaskProfile::for_task(settings.task_kind()).with_overrides(&settings.overrides);
        let resources = LanguageResources::from_settings(language, settings)?;
        Ok(Self::new(profile, resources).with_metrics(settings.observability.metrics_enabled))
    }

    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.metrics_enabled = enabled;
        self
    }

    pub fn language(&self) -> Language {
        self.resources.language
    }

    pub fn task(&self) -> TaskKind {
        self.profile.task
    }

    pub fn profile(&self) -> &TaskProfile {
        &self.profile
    }

    pub fn resources(&self) -> &LanguageResources {
        &self.resources
    }

    /// Normalize one cell
    pub fn process(&self, cell: &Cell) -> String {
        pipeline::process(cell, &self.profile, &self.resources)
    }

    /// Normalize one string
    pub fn process_text(&self, text: &str) -> String {
        pipeline::process_text(text, &self.profile, &self.resources)
    }

    /// Normalize one string and keep every stage that changed it
    pub fn process_traced(&self, text: &str) -> ProcessedText {
        pipeline::process_traced(text, &self.profile, &self.resources)
    }

    /// Normalize a column, preserving length and order
    pub fn process_column(&self, cells: &[Cell]) -> Vec<String> {
        let output: Vec<String> = cells.iter().map(|cell| self.process(cell)).collect();

        let non_text = cells.iter().filter(|c| !c.is_text()).count();
        let empty = output.iter().filter(|s| s.is_empty()).count();

        tracing::debug!(
            language = %self.language(),
            task = %self.task(),
            records = cells.len(),
            non_text,
            empty,
            "Processed column"
        );

        if self.metrics_enabled {
            let language = self.language().code();
            let task = self.task().name();
            metrics::counter!(
                "corpus_prep_records_processed_total",
                "language" => language,
                "task" => task
            )
            .increment(cells.len() as u64);
            metrics::counter!(
                "corpus_prep_records_empty_total",
                "language" => language,
                "task" => task
            )
            .increment(empty as u64);
        }

        output
    }
}

/// Overridden stages the language's pipeline never runs
///
/// Persian skips accent stripping (it would decompose madda and hamza) and
/// English number spelling.
fn ignored_overrides(language: Language, overrides: &StageOverrides) -> Vec<&'static str> {
    match language {
        Language::English => Vec::new(),
        Language::Persian => [
            ("remove_accents", overrides.remove_accents),
            ("convert_numbers_to_words", overrides.convert_numbers_to_words),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|_| name))
        .collect(),
    }
}

/// English and Persian normalizers for one parallel corpus
#[derive(Debug, Clone)]
pub struct CorpusNormalizer {
    english: Normalizer,
    persian: Normalizer,
}

impl CorpusNormalizer {
    pub fn new(english: Normalizer, persian: Normalizer) -> Self {
        Self { english, persian }
    }

    /// Build both sides; any resource that fails to load fails the whole build
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let english = Normalizer::from_settings(Language::English, settings)?;
        let persian = Normalizer::from_settings(Language::Persian, settings)?;

        tracing::info!(
            task = %english.task(),
            environment = ?settings.environment,
            "Corpus normalizer ready"
        );

        Ok(Self { english, persian })
    }

    /// Built-in resources for a task name
    pub fn for_task(task: &str) -> Self {
        Self {
            english: Normalizer::for_task(Language::English, task),
            persian: Normalizer::for_task(Language::Persian, task),
        }
    }

    pub fn normalizer(&self, language: Language) -> &Normalizer {
        match language {
            Language::English => &self.english,
            Language::Persian => &self.persian,
        }
    }

    /// Normalize both columns of a parallel corpus
    ///
    /// Columns are processed independently; rows stay aligned by index.
    pub fn process_columns(&self, english: &[Cell], persian: &[Cell]) -> (Vec<String>, Vec<String>) {
        if english.len() != persian.len() {
            tracing::warn!(
                english = english.len(),
                persian = persian.len(),
                "Column lengths differ"
            );
        }
        (
            self.english.process_column(english),
            self.persian.process_column(persian),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_column_keeps_shape() {
        let normalizer = Normalizer::for_task(Language::English, "translation");
        let cells = vec![
            Cell::from("Hello   World"),
            Cell::Missing,
            Cell::Numeric(12.0),
            Cell::from(""),
        ];
        let out = normalizer.process_column(&cells);
        assert_eq!(out, vec!["hello world", "", "", ""]);
    }

    #[test]
    fn test_unknown_task_uses_default() {
        let normalizer = Normalizer::for_task(Language::English, "poetry");
        assert_eq!(normalizer.task(), TaskKind::Default);
    }

    #[test]
    fn test_from_settings_applies_overrides() {
        let mut settings = Settings::default();
        settings.task.name = "translation".to_string();
        settings.overrides.apply_dictionary_replacements = Some(true);

        let normalizer = Normalizer::from_settings(Language::English, &settings).unwrap();
        assert_eq!(normalizer.task(), TaskKind::Translation);
        assert!(normalizer.profile().apply_dictionary_replacements);
        assert_eq!(normalizer.process_text("I'm here"), "i am here");
    }

    #[test]
    fn test_persian_ignored_overrides() {
        let mut overrides = StageOverrides::default();
        assert!(ignored_overrides(Language::Persian, &overrides).is_empty());

        overrides.remove_accents = Some(true);
        overrides.convert_numbers_to_words = Some(true);
        overrides.apply_stemming = Some(true);
        assert_eq!(
            ignored_overrides(Language::Persian, &overrides),
            vec!["remove_accents", "convert_numbers_to_words"]
        );
        assert!(ignored_overrides(Language::English, &overrides).is_empty());
    }

    #[test]
    fn test_persian_keeps_digits_despite_override() {
        let mut settings = Settings::default();
        settings.task.name = "ner".to_string();
        settings.overrides.convert_numbers_to_words = Some(true);

        let normalizer = Normalizer::from_settings(Language::Persian, &settings).unwrap();
        assert!(normalizer.profile().convert_numbers_to_words);
        assert_eq!(normalizer.process_text("۳ کتاب"), "3 کتاب");
    }

    #[test]
    fn test_corpus_columns() {
        let corpus = CorpusNormalizer::for_task("translation");
        let (en, fa) = corpus.process_columns(
            &[Cell::from("Good MORNING"), Cell::Missing],
            &[Cell::from("صبح  بخیر"), Cell::from("سلام")],
        );
        assert_eq!(en, vec!["good morning", ""]);
        assert_eq!(fa, vec!["صبح بخیر", "سلام"]);
    }
}
