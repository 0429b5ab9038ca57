//! Ankideck - Card builder
//!
//! Turns validated vocabulary rows into front/back flashcard pairs.

use std::collections::BTreeMap;

use crate::highlight::highlight;
use crate::link::LookupLink;
use crate::row::{Row, SkipReason};

/// Line break between the word and its example sentence
pub const SEPARATOR: &str = "<br><br>";

/// A flashcard: prompt side and answer side, both inline HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub front: String,
    pub back: String,
}

/// Result of building a card from one row
#[derive(Debug)]
pub enum CardResult {
    /// All fields present, card produced
    Built(Card),
    /// Row incomplete, no card
    Skipped(SkipReason),
}

/// Builds cards, optionally linking the front sentence to a lookup service
#[derive(Debug, Clone, Default)]
pub struct CardBuilder {
    link: Option<LookupLink>,
}

impl CardBuilder {
    /// Builder without lookup links
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the front sentence in `link`
    pub fn with_link(mut self, link: LookupLink) -> Self {
        self.link = Some(link);
        self
    }

    pub fn link(&self) -> Option<&LookupLink> {
        self.link.as_ref()
    }

    /// Build the card for a single row
    pub fn build(&self, row: &Row) -> CardResult {
        let row = match row.validate() {
            Ok(row) => row,
            Err(reason) => return CardResult::Skipped(reason),
        };

        let highlighted_subject = highlight(row.subject_word, row.subject_sentence);
        let highlighted_translation = highlight(row.translated_word, row.translated_sentence);

        let front_sentence = match &self.link {
            Some(link) => link.wrap(row.subject_sentence, &highlighted_subject),
            None => highlighted_subject.into_owned(),
        };

        CardResult::Built(Card {
            front: format!("{}{}{}", row.subject_word, SEPARATOR, front_sentence),
            back: format!(
                "{}{}{}",
                row.translated_word, SEPARATOR, highlighted_translation
            ),
        })
    }
}

/// Counts collected over one conversion run
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub total_rows: usize,
    pub cards_written: usize,
    pub skipped_rows: usize,
    pub skips_by_column: BTreeMap<&'static str, usize>,
}

impl BuildSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_built(&mut self) {
        self.total_rows += 1;
        self.cards_written += 1;
    }

    pub fn record_skipped(&mut self, reason: &SkipReason) {
        self.total_rows += 1;
        self.skipped_rows += 1;
        *self.skips_by_column.entry(reason.column()).or_insert(0) += 1;
    }
}
