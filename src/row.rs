//! Ankideck - Input rows
//!
//! One record of the vocabulary file, keyed by header name.

use serde::Deserialize;

/// Input column names, in validation order
pub const COLUMNS: [&str; 4] = [
    "czech_word",
    "english_translation",
    "czech_sentence",
    "english_sentence",
];

/// A raw vocabulary record
///
/// Columns missing from a short record deserialize as empty strings so that
/// validation, not parsing, decides whether the row is usable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Row {
    #[serde(rename = "czech_word")]
    pub subject_word: String,
    #[serde(rename = "english_translation")]
    pub translated_word: String,
    #[serde(rename = "czech_sentence")]
    pub subject_sentence: String,
    #[serde(rename = "english_sentence")]
    pub translated_sentence: String,
}

/// Reason why a row produced no card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Column is empty or whitespace-only
    MissingField(&'static str),
}

impl SkipReason {
    pub fn description(&self) -> String {
        match self {
            SkipReason::MissingField(column) => format!("Missing value for {}", column),
        }
    }

    /// Column the reason refers to
    pub fn column(&self) -> &'static str {
        match self {
            SkipReason::MissingField(column) => column,
        }
    }
}

/// A row whose four fields are trimmed and non-empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRow<'a> {
    pub subject_word: &'a str,
    pub translated_word: &'a str,
    pub subject_sentence: &'a str,
    pub translated_sentence: &'a str,
}

impl Row {
    pub fn new(
        subject_word: impl Into<String>,
        translated_word: impl Into<String>,
        subject_sentence: impl Into<String>,
        translated_sentence: impl Into<String>,
    ) -> Self {
        Self {
            subject_word: subject_word.into(),
            translated_word: translated_word.into(),
            subject_sentence: subject_sentence.into(),
            translated_sentence: translated_sentence.into(),
        }
    }

    /// Trim every field and check none is empty
    ///
    /// Reports the first empty column in input column order.
    pub fn validate(&self) -> Result<ValidRow<'_>, SkipReason> {
        let fields = [
            self.subject_word.trim(),
            self.translated_word.trim(),
            self.subject_sentence.trim(),
            self.translated_sentence.trim(),
        ];

        if let Some(idx) = fields.iter().position(|f| f.is_empty()) {
            return Err(SkipReason::MissingField(COLUMNS[idx]));
        }

        let [subject_word, translated_word, subject_sentence, translated_sentence] = fields;
        Ok(ValidRow {
            subject_word,
            translated_word,
            subject_sentence,
            translated_sentence,
        })
    }
}
