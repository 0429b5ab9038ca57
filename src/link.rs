//! Ankideck - Lookup links
//!
//! Turns the front sentence into a link that asks an online assistant to
//! explain it. The link is styled to read as plain text on the card.

use anyhow::{Context, Result};
use reqwest::Url;

/// Search service used for lookups
pub const DEFAULT_LOOKUP_URL: &str = "https://www.perplexity.ai/search";

/// Query parameter carrying the question
pub const DEFAULT_QUERY_PARAM: &str = "q";

/// Instruction placed in front of the sentence text
pub const DEFAULT_PROMPT: &str = "Explain the meaning and grammar of this Czech sentence \
word by word, then translate it into English: ";

/// Anchor style that hides the link
pub const LINK_STYLE: &str = "color:inherit; text-decoration:none;";

/// Lookup link template
#[derive(Debug, Clone, PartialEq)]
pub struct LookupLink {
    base: Url,
    query_param: String,
    prompt: String,
}

impl Default for LookupLink {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_LOOKUP_URL).expect("valid default lookup URL"),
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl LookupLink {
    /// Create a link template for a custom service
    pub fn new(base_url: &str, query_param: &str, prompt: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .with_context(|| format!("Invalid lookup URL: {}", base_url))?;
        Ok(Self {
            base,
            query_param: query_param.to_string(),
            prompt: prompt.to_string(),
        })
    }

    /// Lookup URL for the plain sentence text
    ///
    /// The prompt and sentence are form-encoded into a single query value.
    pub fn url_for(&self, sentence: &str) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair(&self.query_param, &format!("{}{}", self.prompt, sentence));
        url
    }

    /// Wrap already highlighted markup in an anchor pointing at the lookup for `sentence`
    pub fn wrap(&self, sentence: &str, highlighted: &str) -> String {
        format!(
            r#"<a href="{}" style="{}">{}</a>"#,
            self.url_for(sentence),
            LINK_STYLE,
            highlighted
        )
    }
}
