//! Stage library
//!
//! Every stage is a total, pure `&str -> String` function (token stages work
//! on slices). The pipeline decides which ones run and in what order.

pub mod emoji;
pub mod numbers;
pub mod persian;
pub mod punctuation;
pub mod unicode;
pub mod web;

pub use emoji::{handle_emojis, is_emoji};
pub use numbers::{
    convert_numbers_to_words, number_to_words, remove_numbers_only, separate_alnum_boundaries,
};
pub use persian::{handle_persian_dates, jalali_to_gregorian, remove_half_space, strip_cyrillic, strip_latin};
pub use punctuation::clean_punctuation;
pub use unicode::{collapse_whitespace, fold_case, normalize_unicode, strip_accents};
pub use web::{strip_social_elements, strip_url_html};
