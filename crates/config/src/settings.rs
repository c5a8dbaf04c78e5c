//! Main settings module

use config::{Config, Environment, File};
use corpus_prep_core::{EmojiStrategy, Language, TaskKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{emoji, env, spelling};
use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Missing resource files only cause warnings
    #[default]
    Development,
    Staging,
    /// Missing resource files are fatal
    Production,
}

impl RuntimeEnvironment {
    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Target task selection
    #[serde(default)]
    pub task: TaskSettings,

    /// English-side resources
    #[serde(default)]
    pub english: LanguageSettings,

    /// Persian-side resources
    #[serde(default)]
    pub persian: LanguageSettings,

    /// Optional Persian-only rules
    #[serde(default)]
    pub persian_rules: PersianRules,

    /// Per-stage overrides applied on top of the task profile
    #[serde(default)]
    pub overrides: StageOverrides,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Task selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSettings {
    /// Registry key; unknown names fall back to `default`
    #[serde(default = "default_task_name")]
    pub name: String,
}

fn default_task_name() -> String {
    TaskKind::Default.name().to_string()
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            name: default_task_name(),
        }
    }
}

/// Resources for one side of the corpus
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LanguageSettings {
    #[serde(default)]
    pub spelling: SpellingSettings,

    /// Stopword file, one entry per line; built-in list when unset
    #[serde(default)]
    pub stopwords_path: Option<String>,

    /// Placeholder for the `replace` emoji strategy; language default when unset
    #[serde(default)]
    pub emoji_placeholder: Option<String>,

    /// TOML file of extra `from = "to"` substitutions
    #[serde(default)]
    pub substitutions_path: Option<String>,
}

impl LanguageSettings {
    /// Placeholder for the `replace` emoji strategy
    pub fn emoji_placeholder_for(&self, language: Language) -> &str {
        match &self.emoji_placeholder {
            Some(placeholder) => placeholder.as_str(),
            None => match language {
                Language::English => emoji::ENGLISH_PLACEHOLDER,
                Language::Persian => emoji::PERSIAN_PLACEHOLDER,
            },
        }
    }
}

/// Spelling correction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellingSettings {
    /// Frequency dictionary ("term count" per line); correction disabled when unset
    #[serde(default)]
    pub dictionary_path: Option<String>,

    #[serde(default = "default_dictionary_separator")]
    pub separator: String,

    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: i64,

    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,
}

fn default_dictionary_separator() -> String {
    spelling::DICTIONARY_SEPARATOR.to_string()
}
fn default_max_edit_distance() -> i64 {
    spelling::MAX_EDIT_DISTANCE
}
fn default_min_word_length() -> usize {
    spelling::MIN_WORD_LENGTH
}

impl Default for SpellingSettings {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            separator: default_dictionary_separator(),
            max_edit_distance: default_max_edit_distance(),
            min_word_length: default_min_word_length(),
        }
    }
}

/// Persian-only rules that no task profile toggles
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PersianRules {
    /// Convert Solar Hijri `YYYY/MM/DD` dates to Gregorian instead of deleting them
    #[serde(default)]
    pub convert_dates: bool,

    /// Remove ASCII Latin letters
    #[serde(default)]
    pub strip_latin: bool,

    /// Remove Cyrillic letters
    #[serde(default)]
    pub strip_cyrillic: bool,
}

/// Optional per-stage overrides
///
/// `None` keeps the task profile's value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StageOverrides {
    #[serde(default)]
    pub lowercase: Option<bool>,
    #[serde(default)]
    pub normalize_unicode: Option<bool>,
    #[serde(default)]
    pub remove_accents: Option<bool>,
    #[serde(default)]
    pub handle_emojis: Option<EmojiStrategy>,
    #[serde(default)]
    pub correct_spelling: Option<bool>,
    #[serde(default)]
    pub remove_url_html: Option<bool>,
    #[serde(default)]
    pub remove_social_elements: Option<bool>,
    #[serde(default)]
    pub apply_dictionary_replacements: Option<bool>,
    #[serde(default)]
    pub separate_alnum: Option<bool>,
    #[serde(default)]
    pub clean_punctuation: Option<bool>,
    #[serde(default)]
    pub remove_numbers_only: Option<bool>,
    #[serde(default)]
    pub convert_numbers_to_words: Option<bool>,
    #[serde(default)]
    pub tokenize: Option<bool>,
    #[serde(default)]
    pub remove_stopwords: Option<bool>,
    #[serde(default)]
    pub apply_stemming: Option<bool>,
    #[serde(default)]
    pub apply_lemmatization: Option<bool>,
    #[serde(default)]
    pub collapse_whitespace: Option<bool>,
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,

    /// Emit record counters through the `metrics` facade
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
            metrics_enabled: true,
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the configured task, falling back to `default` for unknown names
    pub fn task_kind(&self) -> TaskKind {
        match TaskKind::from_name(&self.task.name) {
            Some(kind) => kind,
            None => {
                tracing::warn!(task = %self.task.name, "Unknown task name, using default profile");
                TaskKind::Default
            }
        }
    }

    /// Settings for one side of the corpus
    pub fn language(&self, language: Language) -> &LanguageSettings {
        match language {
            Language::English => &self.english,
            Language::Persian => &self.persian,
        }
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        for language in Language::all() {
            self.validate_language(*language)?;
        }
        self.validate_resource_paths()?;
        Ok(())
    }

    fn validate_language(&self, language: Language) -> Result<(), ConfigError> {
        let section = language.name().to_lowercase();
        let settings = self.language(language);

        let distance = settings.spelling.max_edit_distance;
        if !(0..=spelling::MAX_EDIT_DISTANCE_LIMIT).contains(&distance) {
            return Err(ConfigError::InvalidValue {
                field: format!("{}.spelling.max_edit_distance", section),
                message: format!(
                    "must be between 0 and {}, got {}",
                    spelling::MAX_EDIT_DISTANCE_LIMIT,
                    distance
                ),
            });
        }

        if settings.spelling.min_word_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: format!("{}.spelling.min_word_length", section),
                message: "must be at least 1".to_string(),
            });
        }

        if settings.spelling.separator.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("{}.spelling.separator", section),
                message: "must not be empty".to_string(),
            });
        }

        if let Some(placeholder) = &settings.emoji_placeholder {
            if placeholder.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("{}.emoji_placeholder", section),
                    message: "must not be blank".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Check configured resource files
    ///
    /// In production/staging missing files are errors, in development they
    /// only warn. Resource construction fails later either way.
    fn validate_resource_paths(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        for language in Language::all() {
            let section = language.name().to_lowercase();
            let settings = self.language(*language);
            let paths = [
                ("spelling.dictionary_path", &settings.spelling.dictionary_path),
                ("stopwords_path", &settings.stopwords_path),
                ("substitutions_path", &settings.substitutions_path),
            ];

            for (field, path) in paths {
                let Some(path) = path else { continue };
                let path_obj = Path::new(path);
                if !path_obj.exists() {
                    if self.environment.is_strict() {
                        errors.push(format!("{}.{}: file not found: {}", section, field, path));
                    } else {
                        tracing::warn!("Resource not found: {}.{} = {}", section, field, path);
                    }
                } else if !path_obj.is_file() {
                    errors.push(format!(
                        "{}.{}: path exists but is not a file: {}",
                        section, field, path
                    ));
                }
            }
        }

        if !errors.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "resources".to_string(),
                message: format!("Resource validation failed:\n  - {}", errors.join("\n  - ")),
            });
        }

        Ok(())
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (CORPUS_PREP__ prefix)
/// 2. config/{env}.toml (if env specified)
/// 3. config/default.toml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Load settings rooted at an explicit configuration directory
pub fn load_settings_from(config_dir: &Path, env_name: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    let default_path = config_dir.join("default");
    builder = builder.add_source(File::with_name(&default_path.to_string_lossy()).required(false));

    if let Some(env_name) = env_name {
        let env_path = config_dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_path.to_string_lossy()).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix(env::PREFIX)
            .separator(env::SEPARATOR)
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.task.name, "default");
        assert_eq!(settings.english.spelling.max_edit_distance, 2);
        assert_eq!(settings.english.spelling.min_word_length, 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_emoji_placeholder_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.english.emoji_placeholder_for(Language::English), "emoji");
        assert_eq!(settings.persian.emoji_placeholder_for(Language::Persian), "[EMOJI]");
    }

    #[test]
    fn test_edit_distance_validation() {
        let mut settings = Settings::default();
        settings.persian.spelling.max_edit_distance = 4;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("persian.spelling.max_edit_distance"));

        settings.persian.spelling.max_edit_distance = 0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_blank_placeholder_rejected() {
        let mut settings = Settings::default();
        settings.english.emoji_placeholder = Some("  ".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_resource_strict_only_in_production() {
        let mut settings = Settings::default();
        settings.english.stopwords_path = Some("/nonexistent/stopwords.txt".to_string());
        assert!(settings.validate().is_ok());

        settings.environment = RuntimeEnvironment::Production;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_unknown_task_falls_back() {
        let mut settings = Settings::default();
        settings.task.name = "poetry".to_string();
        assert_eq!(settings.task_kind(), TaskKind::Default);

        settings.task.name = "topic_modeling".to_string();
        assert_eq!(settings.task_kind(), TaskKind::TopicModeling);
    }

    #[test]
    fn test_load_layered_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            r#"
[task]
name = "sentiment"

[persian_rules]
strip_latin = true

[overrides]
handle_emojis = "remove"
"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("ner.toml"),
            r#"
[task]
name = "ner"

[english.spelling]
max_edit_distance = 1
"#,
        )
        .unwrap();

        let base = load_settings_from(dir.path(), None).unwrap();
        assert_eq!(base.task_kind(), TaskKind::Sentiment);
        assert!(base.persian_rules.strip_latin);
        assert_eq!(base.overrides.handle_emojis, Some(EmojiStrategy::Remove));
        assert_eq!(base.overrides.tokenize, None);

        let layered = load_settings_from(dir.path(), Some("ner")).unwrap();
        assert_eq!(layered.task_kind(), TaskKind::Ner);
        assert_eq!(layered.english.spelling.max_edit_distance, 1);
        assert!(layered.persian_rules.strip_latin);
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(dir.path(), Some("missing")).unwrap();
        assert_eq!(settings.task.name, "default");
        assert!(settings.english.spelling.dictionary_path.is_none());
    }

    #[test]
    fn test_invalid_file_value_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[english.spelling]\nmax_edit_distance = 9\n",
        )
        .unwrap();
        assert!(matches!(
            load_settings_from(dir.path(), None),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
