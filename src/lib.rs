//! Pulls probable character names out of a narrative text.
//!
//! Two shallow scans run over the whole text: capitalized words after a
//! fixed set of lead-in words (`the Hatter`, `said Alice`), and one or two
//! capitalized words before `replied`. Candidates are deduplicated in
//! first-seen order and sorted.

use std::fs;
use std::path::Path;

use tracing::info;

pub mod error;
pub mod extractor;
pub mod logging;
pub mod pattern;
pub mod preprocess;

pub use error::{ExtractError, Result};
pub use extractor::{extract_names, Extraction, ExtractorRules, NameSet};

/// Input used when no path is given on the command line.
pub const DEFAULT_SOURCE_PATH: &str = "preprocessed-alice.txt";

/// Reads the whole file as UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = text.len(), "read source text");
    Ok(text)
}

/// Reads `path`, optionally normalizes it, and extracts names.
pub fn extract_file(path: &Path, normalize: bool) -> Result<Extraction> {
    let text = read_source(path)?;
    let text = if normalize {
        preprocess::normalize(&text)
    } else {
        text
    };
    Ok(extract_names(&text))
}
