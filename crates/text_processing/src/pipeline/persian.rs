//! Persian stage order
//!
//! Dates are handled before anything that could split them, and half-spaces
//! are resolved before the sign table runs. Emoji are handled last so the
//! `[EMOJI]` placeholder survives sign folding.

use corpus_prep_core::Language;

use super::Run;
use crate::profile::TaskProfile;
use crate::resources::LanguageResources;
use crate::spelling::correct_spelling;
use crate::stages::{
    clean_punctuation, collapse_whitespace, fold_case, handle_emojis, handle_persian_dates,
    normalize_unicode, remove_half_space, remove_numbers_only, separate_alnum_boundaries,
    strip_cyrillic, strip_latin, strip_social_elements, strip_url_html,
};

pub(super) fn apply(run: &mut Run, profile: &TaskProfile, resources: &LanguageResources) {
    let language = Language::Persian;
    let rules = &resources.persian_rules;

    run.raw(profile.lowercase, "fold_case", fold_case);
    run.raw(profile.normalize_unicode, "normalize_unicode", normalize_unicode);
    run.raw(true, "handle_persian_dates", |t| {
        handle_persian_dates(t, rules.convert_dates)
    });
    run.raw(profile.remove_url_html, "remove_url_html", |t| {
        strip_url_html(t, language)
    });
    run.raw(profile.remove_social_elements, "remove_social_elements", |t| {
        strip_social_elements(t, language)
    });
    run.raw(true, "remove_half_space", remove_half_space);
    run.raw(
        profile.apply_dictionary_replacements,
        "apply_dictionary_replacements",
        |t| resources.apply_tables(t),
    );
    run.raw(rules.strip_latin, "strip_latin", strip_latin);
    run.raw(rules.strip_cyrillic, "strip_cyrillic", strip_cyrillic);
    run.raw(profile.separate_alnum, "separate_alnum", separate_alnum_boundaries);
    run.raw(profile.clean_punctuation, "clean_punctuation", |t| {
        clean_punctuation(t, language)
    });
    run.raw(profile.remove_numbers_only, "remove_numbers_only", remove_numbers_only);
    run.raw(
        profile.correct_spelling && resources.spell_checker.is_enabled(),
        "correct_spelling",
        |t| correct_spelling(t, resources.spell_checker.as_ref()),
    );

    run.tokenize(profile.tokenize, resources.tokenizer.as_ref());
    run.tokens(profile.remove_stopwords, "remove_stopwords", |tokens| {
        resources.stopwords.filter(tokens)
    });
    run.tokens(profile.apply_stemming, "apply_stemming", |tokens| {
        tokens.iter().map(|t| resources.stemmer.stem(t)).collect()
    });
    run.tokens(profile.apply_lemmatization, "apply_lemmatization", |tokens| {
        tokens.iter().map(|t| resources.lemmatizer.lemmatize(t)).collect()
    });

    run.raw(profile.handle_emojis.is_enabled(), "handle_emojis", |t| {
        handle_emojis(t, profile.handle_emojis, &resources.emoji_placeholder)
    });
    run.raw(profile.collapse_whitespace, "collapse_whitespace", collapse_whitespace);
}

#[cfg(test)]
mod tests {
    use crate::pipeline::process_text;
    use crate::profile::TaskProfile;
    use crate::resources::LanguageResources;
    use corpus_prep_config::PersianRules;
    use corpus_prep_core::{Language, TaskKind};

    fn resources(convert_dates: bool) -> LanguageResources {
        LanguageResources::builtin(Language::Persian).with_persian_rules(PersianRules {
            convert_dates,
            ..Default::default()
        })
    }

    #[test]
    fn test_date_converted_under_translation() {
        let profile = TaskProfile::for_task(TaskKind::Translation);
        assert_eq!(
            process_text("تاریخ امروز ۱۴۰۲/۰۵/۲۰ است", &profile, &resources(true)),
            "تاریخ امروز 2023-08-11 است"
        );
        assert_eq!(
            process_text("تاریخ امروز ۱۴۰۲/۰۵/۲۰ است", &profile, &resources(false)),
            "تاریخ امروز است"
        );
    }

    #[test]
    fn test_half_space_under_translation() {
        let profile = TaskProfile::for_task(TaskKind::Translation);
        assert_eq!(
            process_text("این\u{200C}ها متن\u{200C}ی است", &profile, &resources(false)),
            "این ها متنی است"
        );
    }

    #[test]
    fn test_emoji_placeholder_survives() {
        let profile = TaskProfile::for_task(TaskKind::Default);
        let out = process_text("کتاب خوب 😊", &profile, &resources(false));
        assert!(out.ends_with("[EMOJI]"), "{}", out);
        assert!(out.contains("کتاب"));
    }

    #[test]
    fn test_arabic_variants_unified() {
        let profile = TaskProfile::for_task(TaskKind::Ner);
        assert_eq!(process_text("كتاب علي", &profile, &resources(false)), "کتاب علی");
    }
}
