//! Candidate display name inference

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z\s]+$").expect("valid name regex"));

static DOCUMENT_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(pdf|docx)$").expect("valid extension regex"));

const HEADER_LINES: usize = 5;
const MAX_NAME_CHARS: usize = 50;

/// Infer a display name from the top of a resume, falling back to the file name.
///
/// The first of the first five non-empty lines with two to four words,
/// only ASCII letters and spaces, and a leading capital wins.
pub fn extract_candidate_name(resume_text: &str, fallback_file_name: &str) -> String {
    if resume_text.trim().is_empty() {
        return name_from_file_name(fallback_file_name);
    }

    resume_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(HEADER_LINES)
        .find(|line| looks_like_name(line))
        .map(str::to_string)
        .unwrap_or_else(|| name_from_file_name(fallback_file_name))
}

/// Strip a `.pdf`/`.docx` extension and turn `-`/`_` into spaces
pub fn name_from_file_name(file_name: &str) -> String {
    DOCUMENT_EXTENSION
        .replace(file_name, "")
        .replace(['-', '_'], " ")
}

fn looks_like_name(line: &str) -> bool {
    let words = line.split_whitespace().count();
    (2..=4).contains(&words) && line.chars().count() < MAX_NAME_CHARS && NAME_LINE.is_match(line)
}
