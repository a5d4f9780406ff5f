use super::cleaner::clean;
use super::config::WORD_PATTERN;
use super::morphology::normalize;
use super::types::Extraction;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref WORD_REGEX: Regex = Regex::new(WORD_PATTERN).unwrap();
}

pub fn tokenize(text: &str) -> Vec<String> {
    WORD_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Lower-cased base form of a raw token, or `None` when nothing survives cleaning.
pub fn base_form(token: &str) -> Option<String> {
    let cleaned = clean(token);
    if cleaned.is_empty() {
        return None;
    }
    Some(normalize(&cleaned).to_lowercase())
}

/// Splits `text` into words and checks each base form against one snapshot
/// of the known vocabulary.
pub fn extract(text: &str, known: &HashSet<String>) -> Extraction {
    let all = tokenize(text);

    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    let mut new = Vec::new();

    for token in &all {
        let Some(base) = base_form(token) else {
            continue;
        };
        if !seen.insert(base.clone()) {
            continue;
        }
        if !known.contains(&base) {
            new.push(base.clone());
        }
        unique.push(base);
    }

    Extraction { all, unique, new }
}
