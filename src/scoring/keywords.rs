//! Keyword and phrase extraction from requirement text

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Words dropped from single-word keywords
pub const STOP_WORDS: &[&str] = &[
    "and", "the", "for", "with", "from", "that", "this", "have", "has", "are", "was", "were",
    "been",
];

/// Delimiters that separate single-word candidates
const WORD_DELIMITERS: &[char] = &[',', ';', '\n', '•', '|', '/', '\\', '-'];

/// Coarser delimiters used for multi-word phrases
const PHRASE_DELIMITERS: &[char] = &[',', ';', '\n', '•'];

const MIN_WORD_CHARS: usize = 3;
const PHRASE_WORDS: std::ops::RangeInclusive<usize> = 2..=3;

/// Deduplicated keywords in extraction order.
///
/// Single words come first, followed by phrases. Order matters for every
/// "first N" selection made downstream (strengths, gaps, summary).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.keywords.iter()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }
}

impl FromIterator<String> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let keywords = iter
            .into_iter()
            .filter(|keyword| seen.insert(keyword.clone()))
            .collect();
        Self { keywords }
    }
}

/// Extract normalized keywords and 2-3 word phrases from a requirement block.
///
/// This is a bag-of-tokens split on punctuation and bullets, not a parser.
pub fn extract_keywords(text: &str) -> KeywordSet {
    if text.trim().is_empty() {
        return KeywordSet::default();
    }

    let normalized = text.to_lowercase();

    let words = normalized
        .split(WORD_DELIMITERS)
        .flat_map(str::split_whitespace)
        .filter(|word| word.chars().count() >= MIN_WORD_CHARS)
        .filter(|word| !is_stop_word(word))
        .map(str::to_string);

    let phrases = normalized
        .split(PHRASE_DELIMITERS)
        .map(str::trim)
        .filter(|part| PHRASE_WORDS.contains(&part.split_whitespace().count()))
        .map(str::to_string);

    words.chain(phrases).collect()
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
