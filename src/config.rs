//! Ankideck - Run configuration

use std::path::PathBuf;

use crate::card::CardBuilder;
use crate::link::LookupLink;

/// Vocabulary file read when no input is given
pub const DEFAULT_INPUT_PATH: &str = "example_sentences.csv";

/// Deck file written when no output is given
pub const DEFAULT_OUTPUT_PATH: &str = "anki_example_sentences.tsv";

/// Where to read, where to write, and how to link the front sentence.
///
/// Paths are relative to the working directory unless absolute.
#[derive(Debug, Clone)]
pub struct DeckConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// `None` writes the front sentence without a lookup link
    pub link: Option<LookupLink>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            link: Some(LookupLink::default()),
        }
    }
}

impl DeckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_link(mut self, link: LookupLink) -> Self {
        self.link = Some(link);
        self
    }

    /// Write the front sentence without a lookup link
    pub fn without_link(mut self) -> Self {
        self.link = None;
        self
    }

    /// Card builder matching this configuration
    pub fn card_builder(&self) -> CardBuilder {
        match &self.link {
            Some(link) => CardBuilder::new().with_link(link.clone()),
            None => CardBuilder::new(),
        }
    }
}
