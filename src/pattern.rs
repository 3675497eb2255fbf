// src/pattern.rs

use once_cell::sync::Lazy;

// ----- REGEX CHAR CLASSES -----
// ASCII only: `\w` and `\b` in the regex crate are Unicode-aware, these are not.
pub const WORD_CONTENT_STR: &str = "0-9A-Za-z_";
pub const ALPHA_UPPER_CONTENT_STR: &str = "A-Z";

/// Words that, directly followed by a capitalized word, suggest that word is a name.
/// Case-sensitive, matched as whole words.
pub static LEAD_WORDS: &[&str] = &[
    "old", "see", "by", "I'm", "Said", "said", "An", "A", "an", "a", "The", "the", "With",
    "with", "Was", "was", "were", "and",
];

/// Verb that closes the second scan: `<Name> replied`.
pub const REPLIED_WORD: &str = "replied";

/// Drops the lead word and its space from a lead-word match.
pub const LEAD_PREFIX_PATTERN_STR: &str = r".+? ";

/// Drops ` replied` (and anything after it) from a replied match.
pub const REPLIED_TAIL_PATTERN_STR: &str = r" [^A-Z].+";

// ----- HELPER FUNCTIONS -----

/// `[A-Z][0-9A-Za-z_]+`
fn capitalized_word() -> String {
    format!("[{}][{}]+", ALPHA_UPPER_CONTENT_STR, WORD_CONTENT_STR)
}

static LEAD_WORD_ALTERNATION_STR: Lazy<String> = Lazy::new(|| {
    LEAD_WORDS
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
});

/// `<lead word> <Capitalized>` optionally followed by `[ -]<Capitalized>`.
pub fn get_lead_word_pattern_str() -> String {
    let word = capitalized_word();
    format!(
        r"(?-u:\b)(?:{}) {}(?:[ \-]{})?",
        LEAD_WORD_ALTERNATION_STR.as_str(),
        word,
        word
    )
}

/// `<Capitalized>` optionally followed by ` <Capitalized>`, then ` replied`.
pub fn get_replied_pattern_str() -> String {
    let word = capitalized_word();
    format!(r"{}(?: {})? {}", word, word, REPLIED_WORD)
}
