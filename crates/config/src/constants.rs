//! Shared defaults for corpus preparation
//!
//! Single source of truth for values used by both the settings layer and the
//! text processing crate.

/// Environment variable handling
pub mod env {
    /// Prefix for environment overrides (`CORPUS_PREP__ENGLISH__...`)
    pub const PREFIX: &str = "CORPUS_PREP";

    /// Separator between nested keys
    pub const SEPARATOR: &str = "__";
}

/// Spelling correction defaults
pub mod spelling {
    /// Maximum edit distance searched for a correction
    pub const MAX_EDIT_DISTANCE: i64 = 2;

    /// Upper bound accepted by validation
    pub const MAX_EDIT_DISTANCE_LIMIT: i64 = 3;

    /// Shorter words are never corrected
    pub const MIN_WORD_LENGTH: usize = 3;

    /// Prefix length for the SymSpell index
    pub const PREFIX_LENGTH: i64 = 7;

    /// Separator between term and count in dictionary files
    pub const DICTIONARY_SEPARATOR: &str = " ";
}

/// Emoji placeholders
pub mod emoji {
    pub const ENGLISH_PLACEHOLDER: &str = "emoji";
    pub const PERSIAN_PLACEHOLDER: &str = "[EMOJI]";
}

/// Persian affix handling
pub mod persian {
    /// Stems shorter than this are left as they were
    pub const MIN_STEM_LENGTH: usize = 2;
}
