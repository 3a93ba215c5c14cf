//! Unit normalization
//!
//! A static lookup table maps raw unit spellings — English, transliterated
//! Hindi, and Devanagari — to canonical units. Lookup is trimmed and
//! case-insensitive. Unknown input is not an error: it passes through as
//! `CanonicalUnit::Other` for downstream human review.

use kirana_agent_core::CanonicalUnit;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static UNIT_TABLE: Lazy<HashMap<&'static str, CanonicalUnit>> = Lazy::new(|| {
    use CanonicalUnit::*;
    HashMap::from([
        // Weight
        ("kg", Kilogram),
        ("kilo", Kilogram),
        ("किलो", Kilogram),
        ("keelo", Kilogram),
        ("gm", Gram),
        ("gram", Gram),
        ("ग्राम", Gram),
        // Volume
        ("litre", Litre),
        ("liter", Litre),
        ("लीटर", Litre),
        ("l", Litre),
        ("ml", Millilitre),
        ("millilitre", Millilitre),
        // Count
        ("piece", Piece),
        ("pcs", Piece),
        ("pc", Piece),
        ("पीस", Piece),
        ("packet", Packet),
        ("pkt", Packet),
        ("पैकेट", Packet),
        ("bottle", Bottle),
        ("बोतल", Bottle),
        ("box", Box),
        ("बॉक्स", Box),
        ("dozen", Dozen),
        ("दर्जन", Dozen),
    ])
});

/// Normalize raw unit text to a canonical unit
///
/// Unrecognized spellings come back as `Other(lowercased)` so new units
/// flow through to downstream consumers instead of being dropped.
pub fn normalize_unit(raw: &str) -> CanonicalUnit {
    let key = raw.trim().to_lowercase();
    UNIT_TABLE
        .get(key.as_str())
        .cloned()
        .unwrap_or(CanonicalUnit::Other(key))
}

/// Whether the extractor should treat this word as a unit rather than the
/// first word of a product name
pub(crate) fn is_unit_word(raw: &str) -> bool {
    UNIT_TABLE.contains_key(raw.trim().to_lowercase().as_str())
}
