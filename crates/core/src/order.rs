//! Order domain types
//!
//! A parsed order is the structured form of a free-text customer message:
//! a list of (product, quantity, unit) items in the order they appeared.
//! All types here are immutable value objects created fresh per parse call.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Canonical measurement unit for an ordered item
///
/// The closed set covers every unit the shop trades in; anything else is
/// carried through verbatim as `Other` so downstream layers can surface it
/// for human review instead of dropping the item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalUnit {
    Kilogram,
    Gram,
    Litre,
    Millilitre,
    Piece,
    Packet,
    Bottle,
    Box,
    Dozen,
    /// Unrecognized unit text, lowercased, passed through unchanged
    Other(String),
}

impl CanonicalUnit {
    /// Short form used in replies, invoices, and serialization
    pub fn as_str(&self) -> &str {
        match self {
            Self::Kilogram => "kg",
            Self::Gram => "gm",
            Self::Litre => "litre",
            Self::Millilitre => "ml",
            Self::Piece => "piece",
            Self::Packet => "packet",
            Self::Bottle => "bottle",
            Self::Box => "box",
            Self::Dozen => "dozen",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this is one of the closed canonical units
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    fn from_short_form(s: &str) -> Self {
        match s {
            "kg" => Self::Kilogram,
            "gm" => Self::Gram,
            "litre" => Self::Litre,
            "ml" => Self::Millilitre,
            "piece" => Self::Piece,
            "packet" => Self::Packet,
            "bottle" => Self::Bottle,
            "box" => Self::Box,
            "dozen" => Self::Dozen,
            other => Self::Other(other.to_lowercase()),
        }
    }
}

impl fmt::Display for CanonicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalUnit {
    type Err = std::convert::Infallible;

    /// Parses the canonical short forms; anything else becomes `Other`.
    /// Spelling variants ("kilo", "किलो") are the unit normalizer's job,
    /// not this impl's.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_short_form(s))
    }
}

impl Serialize for CanonicalUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CanonicalUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_short_form(&raw))
    }
}

/// One line item of a parsed order
///
/// `quantity` is strictly positive: tokens with zero, negative, or
/// unparseable quantities are dropped before this struct is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedItem {
    /// Canonical product name, or lowercased passthrough for unknown products
    pub name: String,
    /// Ordered quantity (> 0)
    pub quantity: f64,
    /// Normalized unit
    pub unit: CanonicalUnit,
    /// Verbatim substring of the source message this item was parsed from
    pub original_text: String,
}

/// A fully parsed customer order
///
/// Invariant: `total_items == items.len()`. An order with zero items is
/// valid and means "nothing understood", not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedOrder {
    /// Items in order of appearance in the message
    pub items: Vec<ParsedItem>,
    /// The raw message this order was parsed from
    pub original_text: String,
    /// Item count, kept equal to `items.len()`
    pub total_items: usize,
}

impl ParsedOrder {
    /// Build an order, establishing the `total_items` invariant
    pub fn new(items: Vec<ParsedItem>, original_text: String) -> Self {
        let total_items = items.len();
        Self {
            items,
            original_text,
            total_items,
        }
    }

    /// Whether nothing was understood from the message
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
