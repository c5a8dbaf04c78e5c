//! Case folding, Unicode normalization and whitespace

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase all cased code points
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// NFKC normalization
pub fn normalize_unicode(text: &str) -> String {
    text.nfkc().collect()
}

/// NFKD, then drop every combining mark
pub fn strip_accents(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Collapse whitespace runs to one space and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
