// src/extractor.rs

use std::collections::HashSet;
use std::io::{self, Write};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::pattern;

/// Compiled scans and trim rules. Built once, shared read-only.
pub struct ExtractorRules {
    lead_word: Regex,
    replied: Regex,
    lead_prefix: Regex,
    replied_tail: Regex,
}

impl ExtractorRules {
    pub fn new() -> Self {
        let lead_word_str = pattern::get_lead_word_pattern_str();
        let lead_word = Regex::new(&lead_word_str)
            .unwrap_or_else(|e| panic!("Lead-word compile error for pattern '{}': {}", lead_word_str, e));

        let replied_str = pattern::get_replied_pattern_str();
        let replied = Regex::new(&replied_str)
            .unwrap_or_else(|e| panic!("Replied compile error for pattern '{}': {}", replied_str, e));

        let lead_prefix = Regex::new(pattern::LEAD_PREFIX_PATTERN_STR)
            .expect("Invalid lead prefix regex");
        let replied_tail = Regex::new(pattern::REPLIED_TAIL_PATTERN_STR)
            .expect("Invalid replied tail regex");

        ExtractorRules {
            lead_word,
            replied,
            lead_prefix,
            replied_tail,
        }
    }

    /// Candidates from the lead-word scan, in scan order.
    pub fn lead_word_candidates(&self, text: &str) -> Vec<String> {
        self.lead_word
            .find_iter(text)
            .map(|m| self.lead_prefix.replace(m.as_str(), "").into_owned())
            .collect()
    }

    /// Candidates from the `replied` scan, in scan order.
    pub fn replied_candidates(&self, text: &str) -> Vec<String> {
        self.replied
            .find_iter(text)
            .map(|m| self.replied_tail.replace(m.as_str(), "").into_owned())
            .collect()
    }
}

static RULES: Lazy<ExtractorRules> = Lazy::new(ExtractorRules::new);

/// Insert-if-absent list that remembers first-seen order.
#[derive(Debug, Default)]
pub struct NameSet {
    seen: HashSet<String>,
    names: Vec<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when `name` was already present.
    pub fn insert(&mut self, name: String) -> bool {
        if self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.names.push(name);
        true
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn into_sorted(self) -> Vec<String> {
        let mut names = self.names;
        names.sort();
        names
    }
}

impl Extend<String> for NameSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

/// Unique candidate names, sorted ascending by byte order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    names: Vec<String>,
}

impl Extraction {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    /// One name per line, then the count on its own line.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for name in &self.names {
            writeln!(out, "{}", name)?;
        }
        writeln!(out, "{}", self.count())?;
        out.flush()
    }
}

/// Runs both scans over `text` and returns the deduplicated, sorted candidates.
pub fn extract_names(text: &str) -> Extraction {
    extract_names_with(&RULES, text)
}

fn extract_names_with(rules: &ExtractorRules, text: &str) -> Extraction {
    let lead = rules.lead_word_candidates(text);
    let replied = rules.replied_candidates(text);
    debug!(lead_matches = lead.len(), replied_matches = replied.len(), "scanned text");

    // Lead-word candidates first so their first-seen position wins.
    let mut set = NameSet::new();
    set.extend(lead);
    set.extend(replied);
    debug!(unique = set.len(), "deduplicated candidates");

    Extraction {
        names: set.into_sorted(),
    }
}
