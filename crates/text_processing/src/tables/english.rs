//! English lookup tables

use super::common::{LATIN_VARIANTS, SPECIAL_CHARACTERS};
use super::LookupTable;

/// Contraction expansions
///
/// Compound forms precede their prefixes so `can't've` is not split into
/// `cannot've`. Lowercase `i` forms follow the capitalised ones because case
/// folding usually runs first.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "are not"),
    ("aren't", "are not"),
    ("can't've", "cannot have"),
    ("can't", "cannot"),
    ("'cause", "because"),
    ("could've", "could have"),
    ("couldn't've", "could not have"),
    ("couldn't", "could not"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't've", "had not have"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'd've", "he would have"),
    ("he'd", "he had"),
    ("he'll've", "he will have"),
    ("he'll", "he will"),
    ("he's", "he is"),
    ("how'd'y", "how do you"),
    ("how'd", "how did"),
    ("how'll", "how will"),
    ("how's", "how is"),
    ("I'd've", "I would have"),
    ("I'd", "I had"),
    ("I'll've", "I will have"),
    ("I'll", "I will"),
    ("I'm", "I am"),
    ("I've", "I have"),
    ("i'd've", "i would have"),
    ("i'd", "i had"),
    ("i'll've", "i will have"),
    ("i'll", "i will"),
    ("i'm", "i am"),
    ("i've", "i have"),
    ("isn't", "is not"),
    ("it'd've", "it would have"),
    ("it'd", "it had"),
    ("it'll've", "it will have"),
    ("it'll", "it will"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("ma'am", "madam"),
    ("mayn't", "may not"),
    ("might've", "might have"),
    ("mightn't've", "might not have"),
    ("mightn't", "might not"),
    ("must've", "must have"),
    ("mustn't've", "must not have"),
    ("mustn't", "must not"),
    ("needn't've", "need not have"),
    ("needn't", "need not"),
    ("o'clock", "of the clock"),
    ("oughtn't've", "ought not have"),
    ("oughtn't", "ought not"),
    ("shan't've", "shall not have"),
    ("shan't", "shall not"),
    ("sha'n't", "shall not"),
    ("she'd've", "she would have"),
    ("she'd", "she had"),
    ("she'll've", "she will have"),
    ("she'll", "she will"),
    ("she's", "she is"),
    ("should've", "should have"),
    ("shouldn't've", "should not have"),
    ("shouldn't", "should not"),
    ("so've", "so have"),
    ("so's", "so is"),
    ("that'd've", "that would have"),
    ("that'd", "that had"),
    ("that's", "that is"),
    ("there'd've", "there would have"),
    ("there'd", "there had"),
    ("there's", "there is"),
    ("they'd've", "they would have"),
    ("they'd", "they had"),
    ("they'll've", "they will have"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("to've", "to have"),
    ("wasn't", "was not"),
    ("we'd've", "we would have"),
    ("we'd", "we had"),
    ("we'll've", "we will have"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll've", "what will have"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what's", "what is"),
    ("what've", "what have"),
    ("when's", "when is"),
    ("when've", "when have"),
    ("where'd", "where did"),
    ("where's", "where is"),
    ("where've", "where have"),
    ("who'll've", "who will have"),
    ("who'll", "who will"),
    ("who's", "who is"),
    ("who've", "who have"),
    ("why's", "why is"),
    ("why've", "why have"),
    ("will've", "will have"),
    ("won't've", "will not have"),
    ("won't", "will not"),
    ("would've", "would have"),
    ("wouldn't've", "would not have"),
    ("wouldn't", "would not"),
    ("y'all'd've", "you all would have"),
    ("y'all'd", "you all would"),
    ("y'all're", "you all are"),
    ("y'all've", "you all have"),
    ("y'all", "you all"),
    ("you'd've", "you would have"),
    ("you'd", "you had"),
    ("you'll've", "you will have"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
];

/// Punctuation and symbols folded to a space or deleted
pub const SIGNS: &[(&str, &str)] = &[
    (".", " "),
    (":", " "),
    ("(", " "),
    (")", " "),
    ("...", " "),
    ("..", " "),
    (". . .", " "),
    ("…", " "),
    ("\"", " "),
    ("“", " "),
    ("”", " "),
    ("‘", " "),
    ("’", " "),
    ("\"\"", " "),
    ("-", " "),
    ("—", " "),
    ("_", " "),
    ("%", " "),
    ("@", " "),
    ("#", " "),
    ("$", " "),
    ("^", " "),
    ("&", " "),
    ("*", " "),
    ("{", " "),
    ("}", " "),
    ("?", " "),
    ("!", " "),
    ("\\\\", ""),
    ("`", ""),
    ("|", ""),
    ("/", ""),
    ("•", " "),
    ("。", " "),
    ("¡", " "),
    ("¿", " "),
    ("¨", " "),
    ("¯", " "),
    ("°", " "),
    ("±", " "),
    ("²", " "),
    ("³", " "),
    ("´", " "),
    ("µ", " "),
    ("¶", " "),
    ("·", " "),
    ("¸", " "),
    ("¹", " "),
    ("☑", " "),
    ("↓", " "),
    ("➡", " "),
    ("⬅", " "),
    ("▫", " "),
    ("♫", " "),
    ("♪", " "),
    ("©", ""),
    ("®", ""),
    ("\u{20E3}", " "),
    ("»", " "),
    ("«", " "),
    ("<", " "),
    (">", " "),
    ("+", " "),
    ("~", " "),
    ("=", " "),
    ("×", " "),
    ("《", " "),
    ("》", " "),
    ("「", " "),
    ("」", " "),
    ("、", " "),
    ("｀", " "),
    ("\u{064B}", " "),
    ("〜", " "),
    ("ヽ", " "),
    ("\n", " "),
    ("\t", " "),
    ("\r", " "),
    (",", " "),
    ("£", " "),
    ("¢", " "),
    ("€", " "),
    ("\\", " "),
];

/// Month abbreviations, lowercase and capitalised, to full names
pub const MONTHS: &[(&str, &str)] = &[
    ("jan", "january"),
    ("Jan", "january"),
    ("feb", "february"),
    ("Feb", "february"),
    ("mar", "march"),
    ("Mar", "march"),
    ("apr", "april"),
    ("Apr", "april"),
    ("may", "may"),
    ("May", "may"),
    ("jun", "june"),
    ("Jun", "june"),
    ("jul", "july"),
    ("Jul", "july"),
    ("aug", "august"),
    ("Aug", "august"),
    ("sep", "september"),
    ("Sep", "september"),
    ("oct", "october"),
    ("Oct", "october"),
    ("nov", "november"),
    ("Nov", "november"),
    ("dec", "december"),
    ("Dec", "december"),
];

/// Month words recognised in dates: every abbreviation and full name, lowercase
pub fn month_words() -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for (abbrev, full) in MONTHS {
        for word in [abbrev.to_lowercase(), full.to_string()] {
            if !words.contains(&word) {
                words.push(word);
            }
        }
    }
    // Longest first so alternation prefers "june" over "jun"
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words
}

/// English substitution chain
pub fn tables() -> Vec<LookupTable> {
    vec![
        LookupTable::from_static("contractions", CONTRACTIONS),
        LookupTable::from_static("latin_variants", LATIN_VARIANTS),
        LookupTable::from_static("signs", SIGNS),
        LookupTable::from_static("special_characters", SPECIAL_CHARACTERS),
    ]
}
