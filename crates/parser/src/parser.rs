//! Order parsing facade
//!
//! Ties extraction, unit normalization, and product matching together
//! behind a single `parse` call. The parser owns read-only tables built at
//! startup and holds no mutable state, so one instance serves any number
//! of concurrent workers.

use kirana_agent_config::{CatalogConfig, ParserConfig};
use kirana_agent_core::{CanonicalUnit, ParsedItem, ParsedOrder};
use tracing::info;

use crate::extract;
use crate::matcher::ProductMatcher;
use crate::units;

/// Hinglish order parser
pub struct OrderParser {
    matcher: ProductMatcher,
    max_message_len: usize,
}

impl Default for OrderParser {
    fn default() -> Self {
        Self::new(CatalogConfig::default(), ParserConfig::default())
    }
}

impl OrderParser {
    /// Create a parser over a catalog with the given tuning
    pub fn new(catalog: CatalogConfig, config: ParserConfig) -> Self {
        Self {
            matcher: ProductMatcher::new(catalog, config.match_threshold),
            max_message_len: config.max_message_len,
        }
    }

    /// Parse a raw order message into structured items
    ///
    /// Never fails on input: malformed tokens are dropped individually and
    /// an unintelligible message yields an order with zero items. Input is
    /// capped at the configured character count before scanning.
    pub fn parse(&self, text: &str) -> ParsedOrder {
        info!(chars = text.chars().count(), "parsing order message");

        let capped = cap_chars(text, self.max_message_len);
        let mut items = Vec::new();

        for token in extract::extract(capped) {
            let unit = match token.unit_text.as_deref() {
                Some(raw) => units::normalize_unit(raw),
                None => CanonicalUnit::Piece,
            };
            let name = self.matcher.resolve(&token.product_text);

            info!(%name, quantity = token.quantity, unit = %unit, "parsed item");
            items.push(ParsedItem {
                name,
                quantity: token.quantity,
                unit,
                original_text: token.matched_text,
            });
        }

        ParsedOrder::new(items, text.to_string())
    }
}

/// Truncate to at most `max` chars on a char boundary
fn cap_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
