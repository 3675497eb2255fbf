// src/preprocess.rs
//! Typographic cleanup for a raw book before names are scanned.
//!
//! Straight apostrophes are ambiguous: they close contractions, open and
//! close single-quoted dialogue, and mark elisions. This pass rewrites
//! them into distinct characters and turns `--` into an em dash.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MODIFIER_APOSTROPHE: char = '\u{02BC}';
pub const OPEN_SINGLE_QUOTE: char = '\u{2018}';
pub const CLOSE_SINGLE_QUOTE: char = '\u{2019}';
pub const EM_DASH: char = '\u{2014}';

static CONTRACTION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w)'(\w)").unwrap());
static QUOTES_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w]'(?s:.*?)'[^\w]").unwrap());

/// Applies contraction, quote, leftover apostrophe and dash rewrites, in that order.
pub fn normalize(input: &str) -> String {
    let replacement = format!("${{1}}{}${{2}}", MODIFIER_APOSTROPHE);
    let text = CONTRACTION_REGEX.replace_all(input, replacement.as_str());
    let text = pair_quotes(&text);
    let text = text.replace('\'', MODIFIER_APOSTROPHE.encode_utf8(&mut [0; 4]));
    text.replace("--", EM_DASH.encode_utf8(&mut [0; 4]))
}

/// Rewrites single-quote pairs around a span to curly quotes.
///
/// Scanning resumes right after each closing quote, so the non-word
/// character that ends one pair can start the next.
fn pair_quotes(input: &str) -> String {
    let mut open_quotes = Vec::new();
    let mut close_quotes = Vec::new();
    let mut offset = 0;

    while let Some(m) = QUOTES_REGEX.find_at(input, offset) {
        let matched = m.as_str();
        let lead_len = matched.chars().next().map_or(0, char::len_utf8);
        let trail_len = matched.chars().next_back().map_or(0, char::len_utf8);
        let open = m.start() + lead_len;
        let close = m.end() - trail_len - 1;
        open_quotes.push(open);
        close_quotes.push(close);
        offset = close + 1;
    }

    if open_quotes.is_empty() {
        return input.to_string();
    }

    let mut output = String::with_capacity(input.len() + open_quotes.len() * 4);
    let mut opens = open_quotes.into_iter().peekable();
    let mut closes = close_quotes.into_iter().peekable();
    for (i, c) in input.char_indices() {
        if opens.peek() == Some(&i) {
            output.push(OPEN_SINGLE_QUOTE);
            opens.next();
        } else if closes.peek() == Some(&i) {
            output.push(CLOSE_SINGLE_QUOTE);
            closes.next();
        } else {
            output.push(c);
        }
    }
    output
}
