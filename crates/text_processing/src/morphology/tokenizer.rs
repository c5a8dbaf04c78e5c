//! Word tokenizers
//!
//! Whitespace split, then leading and trailing punctuation is peeled off each
//! chunk as separate tokens. Inner punctuation stays (`twenty-one`, `e.g`).

use corpus_prep_core::WordTokenizer;
use unicode_segmentation::UnicodeSegmentation;

use crate::stages::persian::{HALF_SPACE_SUFFIXES, ZWNJ};

fn is_word_grapheme(grapheme: &str) -> bool {
    grapheme.chars().any(|c| c.is_alphanumeric())
}

/// Split a chunk into leading punctuation, core, trailing punctuation
fn peel(chunk: &str, tokens: &mut Vec<String>, mut push_core: impl FnMut(&str, &mut Vec<String>)) {
    let graphemes: Vec<&str> = chunk.graphemes(true).collect();
    let start = graphemes
        .iter()
        .position(|g| is_word_grapheme(g))
        .unwrap_or(graphemes.len());
    let end = graphemes
        .iter()
        .rposition(|g| is_word_grapheme(g))
        .map(|i| i + 1)
        .unwrap_or(start);

    tokens.extend(graphemes[..start].iter().map(|g| g.to_string()));
    if start < end {
        push_core(&graphemes[start..end].concat(), tokens);
    }
    tokens.extend(graphemes[end..].iter().map(|g| g.to_string()));
}

/// English word tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTokenizer;

impl WordTokenizer for EnglishTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            peel(chunk, &mut tokens, |core, tokens| tokens.push(core.to_string()));
        }
        tokens
    }
}

/// Persian word tokenizer
///
/// Additionally splits at a half-space that precedes a plural or comparative
/// suffix; other half-spaces are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersianTokenizer;

impl PersianTokenizer {
    fn split_half_spaces(core: &str, tokens: &mut Vec<String>) {
        let mut current = String::new();
        for (i, c) in core.char_indices() {
            if c != ZWNJ {
                current.push(c);
                continue;
            }
            let rest = &core[i + c.len_utf8()..];
            if HALF_SPACE_SUFFIXES.iter().any(|s| rest.starts_with(s)) && !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }
    }
}

impl WordTokenizer for PersianTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            peel(chunk, &mut tokens, Self::split_half_spaces);
        }
        tokens
    }
}
