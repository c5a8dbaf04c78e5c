//! Emoji handling
//!
//! Emoji are matched per grapheme cluster so skin-tone and ZWJ sequences
//! count as one emoji.

use corpus_prep_core::EmojiStrategy;
use unicode_segmentation::UnicodeSegmentation;

/// `Extended_Pictographic` code points (Unicode emoji-data), plus regional
/// indicators for flags
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x00A9, 0x00A9),
    (0x00AE, 0x00AE),
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    (0x2122, 0x2122),
    (0x2139, 0x2139),
    (0x2194, 0x2199), // arrows
    (0x21A9, 0x21AA),
    (0x231A, 0x231B), // watch, hourglass
    (0x2328, 0x2328),
    (0x2388, 0x2388),
    (0x23CF, 0x23CF),
    (0x23E9, 0x23F3), // media controls, alarm clock
    (0x23F8, 0x23FA),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25AB),
    (0x25B6, 0x25B6),
    (0x25C0, 0x25C0),
    (0x25FB, 0x25FE),
    (0x2600, 0x2605), // miscellaneous symbols
    (0x2607, 0x2612),
    (0x2614, 0x2685),
    (0x2690, 0x2705),
    (0x2708, 0x2712), // dingbats
    (0x2714, 0x2714),
    (0x2716, 0x2716),
    (0x271D, 0x271D),
    (0x2721, 0x2721),
    (0x2728, 0x2728),
    (0x2733, 0x2734),
    (0x2744, 0x2744),
    (0x2747, 0x2747),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2763, 0x2767),
    (0x2795, 0x2797),
    (0x27A1, 0x27A1),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2934, 0x2935),
    (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x3297, 0x3297),
    (0x3299, 0x3299),
    (0x1F000, 0x1F0FF), // game tiles, cards
    (0x1F10D, 0x1F10F),
    (0x1F12F, 0x1F12F),
    (0x1F16C, 0x1F171),
    (0x1F17E, 0x1F17F),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F1AD, 0x1F1FF), // includes regional indicators
    (0x1F201, 0x1F20F),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F23A),
    (0x1F23C, 0x1F23F),
    (0x1F249, 0x1F3FA), // pictographs
    (0x1F400, 0x1F53D),
    (0x1F546, 0x1F64F), // emoticons
    (0x1F680, 0x1F6FF), // transport & map
    (0x1F774, 0x1F77F),
    (0x1F7D5, 0x1F7FF),
    (0x1F80C, 0x1F80F),
    (0x1F848, 0x1F84F),
    (0x1F85A, 0x1F85F),
    (0x1F888, 0x1F88F),
    (0x1F8AE, 0x1F8FF),
    (0x1F90C, 0x1F93A), // supplemental symbols & pictographs
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1FAFF), // through symbols & pictographs extended-A
    (0x1FC00, 0x1FFFD),
];

/// Combining enclosing keycap; `1️⃣` starts with a plain digit
const KEYCAP: char = '\u{20E3}';

/// Closed emoji-to-sentiment map; other emoji pass through untouched
const SENTIMENTS: &[(char, &str)] = &[
    ('😊', "positive"),
    ('😂', "positive"),
    ('😢', "negative"),
    ('😐', "neutral"),
];

fn is_emoji_char(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&cp))
}

/// Check whether a grapheme cluster is an emoji
pub fn is_emoji(grapheme: &str) -> bool {
    grapheme.chars().next().is_some_and(is_emoji_char) || grapheme.contains(KEYCAP)
}

fn sentiment_of(grapheme: &str) -> Option<&'static str> {
    let first = grapheme.chars().next()?;
    SENTIMENTS
        .iter()
        .find(|(c, _)| *c == first)
        .map(|(_, word)| *word)
}

/// Apply an emoji strategy
///
/// `placeholder` is only used by [`EmojiStrategy::Replace`]. Replacements are
/// padded with spaces; callers collapse whitespace afterwards.
pub fn handle_emojis(text: &str, strategy: EmojiStrategy, placeholder: &str) -> String {
    if strategy == EmojiStrategy::Off {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        if !is_emoji(grapheme) {
            out.push_str(grapheme);
            continue;
        }
        match strategy {
            EmojiStrategy::Off => out.push_str(grapheme),
            EmojiStrategy::Remove => {}
            EmojiStrategy::Replace => {
                out.push(' ');
                out.push_str(placeholder);
                out.push(' ');
            }
            EmojiStrategy::Sentiment => match sentiment_of(grapheme) {
                Some(word) => {
                    out.push(' ');
                    out.push_str(word);
                    out.push(' ');
                }
                None => out.push_str(grapheme),
            },
        }
    }
    out
}
