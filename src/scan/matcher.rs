//! Keyword matching.
//!
//! Keywords are matched as whole tokens: a word-boundary anchored pattern,
//! so `anaconda3` inside `anaconda3suffix` never matches, and `anaconda`
//! never matches inside `anaconda3`. Matching is case-sensitive; the list
//! carries the capitalization variants explicitly.

use std::sync::LazyLock;

use regex::Regex;

/// The fixed keyword list, in report order.
pub const KEYWORDS: &[&str] = &[
    "Anaconda",
    "anaconda",
    "miniconda",
    "anaconda3",
    "Anaconda3",
    "miniconda3",
];

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|word| {
            Regex::new(&format!(r"\b{}\b", regex::escape(word)))
                .expect("keyword pattern must compile")
        })
        .collect()
});

/// Keywords present in a line, in keyword-list order.
///
/// At most one entry per keyword: repeated occurrences of the same keyword
/// within one line yield a single record.
pub fn keywords_in_line(line: &str) -> Vec<&'static str> {
    KEYWORDS
        .iter()
        .zip(PATTERNS.iter())
        .filter(|(_, pattern)| pattern.is_match(line))
        .map(|(word, _)| *word)
        .collect()
}
