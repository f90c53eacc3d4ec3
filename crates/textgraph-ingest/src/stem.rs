//! Suffix-stripping stemmer.
//!
//! Light morphological normalization so inflected forms share one
//! vocabulary node. Handles the common English endings; not a full
//! Porter stemmer.

use crate::pipeline::TextProcessor;

/// Stem one word by removing a common English suffix.
///
/// Rules are ordered longest-first; a rule only fires when it leaves a
/// stem of at least two characters, so short words pass through intact.
pub fn stem_word(word: &str) -> String {
    if word.len() <= 3 {
        return word.to_string();
    }

    const RULES: &[(&str, &str)] = &[
        ("ation", "ate"),
        ("iness", "y"),
        ("ness", ""),
        ("ing", ""),
        ("ied", "y"),
        ("ies", "y"),
        ("ed", ""),
        ("es", "e"),
        ("ly", ""),
        ("s", ""),
    ];

    for &(suffix, replacement) in RULES {
        if word.len() > suffix.len() + 1 && word.ends_with(suffix) {
            // Keep words like "ss"-final plurals ("glass") intact.
            if suffix == "s" && word.ends_with("ss") {
                continue;
            }
            let stem = &word[..word.len() - suffix.len()];
            return format!("{stem}{replacement}");
        }
    }

    word.to_string()
}

/// Pipeline step applying [`stem_word`] to every whitespace token.
pub struct Stemmer;

impl TextProcessor for Stemmer {
    fn process(&self, text: &str) -> String {
        text.split_whitespace()
            .map(stem_word)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
