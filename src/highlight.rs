//! Ankideck - Word highlighting
//!
//! Marks the studied word inside an example sentence so it stands out on the card.

use regex::{Captures, Regex, RegexBuilder};
use std::borrow::Cow;
use tracing::warn;

/// Inline style applied to the highlighted word
pub const HIGHLIGHT_STYLE: &str = "color:#06c; font-weight:bold;";

/// Wrap a matched word in the highlight span
pub fn wrap_span(text: &str) -> String {
    format!(r#"<span style="{}">{}</span>"#, HIGHLIGHT_STYLE, text)
}

/// Build the whole-word, case-insensitive pattern for `term`
///
/// The term is escaped so characters like `.` or `+` match literally.
fn word_pattern(term: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
        .case_insensitive(true)
        .build()
}

/// Highlight the first standalone occurrence of `term` in `sentence`
///
/// Matching is case-insensitive and respects Unicode word boundaries, so
/// `pes` is not found inside `pesticid`. The replacement keeps the casing
/// found in the sentence. Later occurrences are left alone, and a sentence
/// without a match comes back unchanged.
///
/// Not idempotent: highlighting an already highlighted sentence wraps again.
pub fn highlight<'a>(term: &str, sentence: &'a str) -> Cow<'a, str> {
    let re = match word_pattern(term) {
        Ok(re) => re,
        Err(e) => {
            warn!("Cannot build pattern for {:?}: {}", term, e);
            return Cow::Borrowed(sentence);
        }
    };

    re.replace(sentence, |caps: &Captures| wrap_span(&caps[0]))
}
