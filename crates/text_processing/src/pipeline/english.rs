//! English stage order

use corpus_prep_core::Language;

use super::Run;
use crate::profile::TaskProfile;
use crate::resources::LanguageResources;
use crate::spelling::correct_spelling;
use crate::stages::{
    clean_punctuation, collapse_whitespace, convert_numbers_to_words, fold_case, handle_emojis,
    normalize_unicode, remove_numbers_only, separate_alnum_boundaries, strip_accents,
    strip_social_elements, strip_url_html,
};

pub(super) fn apply(run: &mut Run, profile: &TaskProfile, resources: &LanguageResources) {
    let language = Language::English;

    run.raw(profile.lowercase, "fold_case", fold_case);
    run.raw(profile.normalize_unicode, "normalize_unicode", normalize_unicode);
    run.raw(profile.remove_accents, "strip_accents", strip_accents);
    run.raw(profile.handle_emojis.is_enabled(), "handle_emojis", |t| {
        handle_emojis(t, profile.handle_emojis, &resources.emoji_placeholder)
    });
    run.raw(
        profile.correct_spelling && resources.spell_checker.is_enabled(),
        "correct_spelling",
        |t| correct_spelling(t, resources.spell_checker.as_ref()),
    );
    run.raw(profile.remove_url_html, "remove_url_html", |t| {
        strip_url_html(t, language)
    });
    run.raw(profile.remove_social_elements, "remove_social_elements", |t| {
        strip_social_elements(t, language)
    });
    run.raw(
        profile.apply_dictionary_replacements,
        "apply_dictionary_replacements",
        |t| resources.apply_tables(t),
    );
    run.raw(profile.separate_alnum, "separate_alnum", separate_alnum_boundaries);
    run.raw(profile.clean_punctuation, "clean_punctuation", |t| {
        clean_punctuation(t, language)
    });
    run.raw(profile.remove_numbers_only, "remove_numbers_only", remove_numbers_only);
    run.raw(
        profile.convert_numbers_to_words,
        "convert_numbers_to_words",
        convert_numbers_to_words,
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

    run.raw(profile.collapse_whitespace, "collapse_whitespace", collapse_whitespace);
}
