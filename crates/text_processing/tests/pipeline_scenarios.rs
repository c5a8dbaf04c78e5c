//! End-to-end normalization scenarios
//!
//! Each test runs complete records through a task profile and checks the
//! cleaned output, the way a corpus column would be processed.

use std::fs;
use std::sync::Arc;

use corpus_prep_config::{load_settings_from, PersianRules, SpellingSettings};
use corpus_prep_core::{Cell, EmojiStrategy, Language, TaskKind};
use corpus_prep_text_processing::{
    process, process_traced, stages, CorpusNormalizer, LanguageResources, LookupTable,
    LookupTables, Normalizer, SymSpellChecker, TaskProfile,
};

const MIXED_ENGLISH: &str = "Hello World! 😊 Check out https://example.com";
const MIXED_PERSIAN: &str = "این یک متن  شامل 😊 و لینک https://example.com است.";

fn english(task: TaskKind, text: &str) -> String {
    let resources = LanguageResources::builtin(Language::English);
    process(&Cell::from(text), &TaskProfile::for_task(task), &resources)
}

fn persian(task: TaskKind, rules: PersianRules, text: &str) -> String {
    let resources = LanguageResources::builtin(Language::Persian).with_persian_rules(rules);
    process(&Cell::from(text), &TaskProfile::for_task(task), &resources)
}

/// Default profile: emoji placeholder, URL dropped, stopwords removed
#[test]
fn test_default_english() {
    assert_eq!(english(TaskKind::Default, MIXED_ENGLISH), "hello world emoji check");
}

/// Translation keeps wording, emoji and sentence punctuation
#[test]
fn test_translation_english() {
    assert_eq!(
        english(TaskKind::Translation, MIXED_ENGLISH),
        "hello world ! 😊 check out"
    );
}

#[test]
fn test_sentiment_maps_known_emoji() {
    assert_eq!(english(TaskKind::Sentiment, "I love it 😊"), "love positive");
    assert_eq!(english(TaskKind::Sentiment, "so sad 😢"), "sad negative");
}

#[test]
fn test_sentiment_leaves_unknown_emoji() {
    assert_eq!(english(TaskKind::Sentiment, "great 🚀"), "great 🚀");
}

#[test]
fn test_ner_keeps_numbers_and_stopwords() {
    assert_eq!(
        english(TaskKind::Ner, "Born in 1990 in Paris"),
        "born in 1990 in paris"
    );
}

#[test]
fn test_topic_modeling_stems_then_lemmatizes() {
    assert_eq!(
        english(TaskKind::TopicModeling, "The runners were running quickly"),
        "runner run quick"
    );
}

#[test]
fn test_summarization_keeps_stopwords() {
    assert_eq!(
        english(TaskKind::Summarization, "The cats and the dogs"),
        "the cat and the dog"
    );
}

#[test]
fn test_spam_detection_corrects_spelling() {
    let checker = SymSpellChecker::from_entries(
        [("free", 5000), ("money", 4000), ("win", 3000)],
        &SpellingSettings::default(),
    )
    .unwrap();
    let resources = LanguageResources::builtin(Language::English).with_spell_checker(Arc::new(checker));
    let profile = TaskProfile::for_task(TaskKind::SpamDetection);

    assert_eq!(
        process(&Cell::from("Fre mony now"), &profile, &resources),
        "free money"
    );
}

#[test]
fn test_markup_and_social_elements_removed() {
    assert_eq!(
        english(
            TaskKind::Translation,
            "<b>Hi</b> @bob #fun visit www.site.com mail a.b@example.org"
        ),
        "hi visit mail"
    );
}

#[test]
fn test_numbers_only_cells_become_empty() {
    assert_eq!(english(TaskKind::Default, "1,234 567"), "");
    assert_eq!(english(TaskKind::TopicModeling, "  2024 "), "");
    // Kept by profiles that do not drop numeric cells
    assert_eq!(english(TaskKind::Ner, "2024"), "2024");
}

#[test]
fn test_unknown_task_matches_default() {
    let fallback = Normalizer::for_task(Language::English, "poetry");
    assert_eq!(fallback.task(), TaskKind::Default);
    assert_eq!(
        fallback.process_text(MIXED_ENGLISH),
        english(TaskKind::Default, MIXED_ENGLISH)
    );
}

#[test]
fn test_injected_tables_replace_builtin_chain() {
    let tables = LookupTables::new(
        vec![LookupTable::from_static("spelling", &[("colour", "color")])],
        vec![],
    );
    let resources = LanguageResources::builtin(Language::English).with_tables(tables);
    let profile = TaskProfile::for_task(TaskKind::Ner);

    assert_eq!(
        process(&Cell::from("Nice colour"), &profile, &resources),
        "nice color"
    );
}

#[test]
fn test_persian_date_converted() {
    let rules = PersianRules {
        convert_dates: true,
        ..Default::default()
    };
    assert_eq!(
        persian(TaskKind::Translation, rules, "تاریخ امروز ۱۴۰۲/۰۵/۲۰ است"),
        "تاریخ امروز 2023-08-11 است"
    );
}

#[test]
fn test_persian_date_deleted_by_default() {
    assert_eq!(
        persian(TaskKind::Translation, PersianRules::default(), "تاریخ امروز ۱۴۰۲/۰۵/۲۰ است"),
        "تاریخ امروز است"
    );
}

#[test]
fn test_persian_half_space() {
    assert_eq!(stages::remove_half_space("این\u{200C}ها متن\u{200C}ی است"), "این ها متنی است");
    assert_eq!(
        persian(TaskKind::Translation, PersianRules::default(), "این\u{200C}ها متن\u{200C}ی است"),
        "این ها متنی است"
    );
}

#[test]
fn test_persian_strip_latin_rule() {
    let rules = PersianRules {
        strip_latin: true,
        ..Default::default()
    };
    assert_eq!(
        persian(TaskKind::Translation, rules, "سلام hello دنیا"),
        "سلام دنیا"
    );
    assert_eq!(
        persian(TaskKind::Translation, PersianRules::default(), "سلام hello دنیا"),
        "سلام hello دنیا"
    );
}

#[test]
fn test_persian_digits_folded() {
    assert_eq!(
        persian(TaskKind::Ner, PersianRules::default(), "۱۲۳ كتاب"),
        "123 کتاب"
    );
}

#[test]
fn test_persian_default_profile() {
    assert_eq!(
        persian(TaskKind::Default, PersianRules::default(), MIXED_PERSIAN),
        "متن شامل [EMOJI] لینک"
    );
}

#[test]
fn test_persian_translation_keeps_sentence_shape() {
    let rules = PersianRules {
        convert_dates: true,
        ..Default::default()
    };
    assert_eq!(
        persian(
            TaskKind::Translation,
            rules,
            "این یک متن ۱۴۰۲/۰۵/۲۰ شامل 😊 و لینک https://example.com است."
        ),
        "این یک متن 2023-08-11 شامل 😊 و لینک است ."
    );
}

/// Sentiment words are applied after stopword removal, as the last stage
#[test]
fn test_persian_sentiment_profile() {
    assert_eq!(
        persian(TaskKind::Sentiment, PersianRules::default(), MIXED_PERSIAN),
        "متن شامل positive لینک"
    );
}

#[test]
fn test_persian_ner_keeps_every_word() {
    assert_eq!(
        persian(TaskKind::Ner, PersianRules::default(), MIXED_PERSIAN),
        "این یک متن شامل 😊 و لینک است"
    );
}

#[test]
fn test_persian_topic_modeling_stems_tokens() {
    assert_eq!(
        persian(TaskKind::TopicModeling, PersianRules::default(), MIXED_PERSIAN),
        "متن شامل 😊 لینک"
    );
    assert_eq!(
        persian(
            TaskKind::TopicModeling,
            PersianRules::default(),
            "کتابهای ما بزرگترین هستند"
        ),
        "کتاب بزرگ هستند"
    );
}

#[test]
fn test_persian_spam_detection_corrects_spelling() {
    let checker = SymSpellChecker::from_entries(
        [("رایگان", 5000), ("پول", 4000)],
        &SpellingSettings::default(),
    )
    .unwrap();
    let resources = LanguageResources::builtin(Language::Persian).with_spell_checker(Arc::new(checker));
    let profile = TaskProfile::for_task(TaskKind::SpamDetection);

    assert_eq!(
        process(&Cell::from("پول رایگن بگیرید"), &profile, &resources),
        "پول رایگان بگیرید"
    );
    assert_eq!(
        process(&Cell::from(MIXED_PERSIAN), &profile, &resources),
        "متن شامل 😊 لینک"
    );
}

#[test]
fn test_persian_summarization_keeps_stopwords() {
    assert_eq!(
        persian(TaskKind::Summarization, PersianRules::default(), MIXED_PERSIAN),
        "این یک متن شامل 😊 و لینک است"
    );
}

#[test]
fn test_persian_emoji_removal() {
    let resources = LanguageResources::builtin(Language::Persian);
    let profile = TaskProfile {
        handle_emojis: EmojiStrategy::Remove,
        ..TaskProfile::for_task(TaskKind::Default)
    };
    assert_eq!(
        process(&Cell::from(MIXED_PERSIAN), &profile, &resources),
        "متن شامل لینک"
    );
}

#[test]
fn test_persian_placeholder_for_newer_emoji_and_symbols() {
    let default = |text: &str| persian(TaskKind::Default, PersianRules::default(), text);
    assert_eq!(default("کتاب 🫠 خوب"), "کتاب [EMOJI] خوب");
    assert_eq!(default("خوب ☑ کتاب"), "خوب [EMOJI] کتاب");
    assert_eq!(default("کتاب ➡ خوب"), "کتاب [EMOJI] خوب");
}

#[test]
fn test_persian_strip_cyrillic_rule() {
    let rules = PersianRules {
        strip_cyrillic: true,
        ..Default::default()
    };
    assert_eq!(
        persian(TaskKind::Translation, rules, "این متن حاوی متن سیریلیک Привет است"),
        "این متن حاوی متن سیریلیک است"
    );
}

#[test]
fn test_single_character_separation() {
    assert_eq!(stages::separate_alnum_boundaries("a"), " ");
}

#[test]
fn test_traced_default_run() {
    let resources = LanguageResources::builtin(Language::English);
    let traced = process_traced(MIXED_ENGLISH, &TaskProfile::default(), &resources);

    assert_eq!(traced.processed, "hello world emoji check");
    let names: Vec<_> = traced.steps.iter().map(|s| s.name.as_str()).collect();
    assert!(names.contains(&"handle_emojis"));
    assert!(names.contains(&"remove_url_html"));
    assert!(names.contains(&"remove_stopwords"));
    assert!(!names.contains(&"correct_spelling"));
}

#[test]
fn test_corpus_from_config_files() {
    let dir = tempfile::tempdir().unwrap();
    let stopwords = dir.path().join("stopwords-fa.txt");
    fs::write(&stopwords, "است\n").unwrap();
    fs::write(
        dir.path().join("default.toml"),
        format!(
            r#"
[task]
name = "ner"

[persian]
stopwords_path = "{}"

[persian_rules]
convert_dates = true

[overrides]
remove_stopwords = true
"#,
            stopwords.display()
        ),
    )
    .unwrap();

    let settings = load_settings_from(dir.path(), None).unwrap();
    let corpus = CorpusNormalizer::from_settings(&settings).unwrap();

    let (en, fa) = corpus.process_columns(
        &[Cell::from("The meeting is today"), Cell::Numeric(1.0)],
        &[Cell::from("جلسه امروز است"), Cell::Missing],
    );
    assert_eq!(en, vec!["meeting today", ""]);
    assert_eq!(fa, vec!["جلسه امروز", ""]);
}

#[test]
fn test_missing_dictionary_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[english.spelling]\ndictionary_path = \"/nonexistent/frequency_en.txt\"\n",
    )
    .unwrap();

    let settings = load_settings_from(dir.path(), None).unwrap();
    assert!(CorpusNormalizer::from_settings(&settings).is_err());
}
