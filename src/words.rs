//! Diacritic-insensitive word counting.
//!
//! The statistics pass measures elements by word count only, so counting
//! is done on a normalized view of the text: NFKD decomposition with all
//! combining marks stripped. An accented word therefore counts the same
//! as its unaccented form ("café" == "cafe"). The text used elsewhere in
//! the pipeline is never altered.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Matches a run of word characters (Unicode-aware `\w`).
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("WORD_RE regex"));

/// Strip combining marks after NFKD decomposition.
///
/// ```
/// use coreex::words::normalize;
///
/// assert_eq!(normalize("un éléphant ça trompe énormément!"),
///            "un elephant ca trompe enormement!");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Count the word tokens in `text`.
///
/// Empty or whitespace-only input yields 0. Never fails.
#[must_use]
pub fn count_words(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    WORD_RE.find_iter(&normalize(text)).count()
}
