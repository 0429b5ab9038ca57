//! Ankideck - Flashcard deck builder for vocabulary example sentences.
//!
//! Reads a tab-separated file of Czech/English word pairs with example
//! sentences and writes an Anki import file where each card shows the word
//! highlighted in context.
//!
//! - **Highlighting** (`highlight`): first whole-word, case-insensitive match
//!   wrapped in a bold colored span, keeping the sentence's own casing.
//! - **Lookup links** (`link`): the front sentence links to an online
//!   assistant asked to explain it.

pub mod card;
pub mod config;
pub mod deck;
pub mod highlight;
pub mod link;
pub mod row;

pub use card::{BuildSummary, Card, CardBuilder, CardResult};
pub use config::DeckConfig;
pub use deck::{build_deck, write_cards};
pub use highlight::highlight;
pub use link::LookupLink;
pub use row::{Row, SkipReason};
