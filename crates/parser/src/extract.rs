//! Raw token extraction
//!
//! Scans a message left to right for non-overlapping "number, optional
//! unit word, product phrase" triples. Both Latin letters and Devanagari
//! code points count as word characters. The regex engine gives linear
//! scan time, so no input can trigger super-linear backtracking.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::units;

/// Number, optional unit-like word, then one or more product words up to
/// the next number or end of text
static ORDER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(\d+(?:\.\d+)?)\s*([a-zA-Z\x{0900}-\x{097F}]+)?\s+([a-zA-Z\x{0900}-\x{097F}]+(?:\s+[a-zA-Z\x{0900}-\x{097F}]+)*)",
    )
    .expect("order pattern is valid")
});

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z\x{0900}-\x{097F}]+").expect("word pattern is valid"));

/// Connectives and request words that follow a product name in Hinglish
/// messages ("2 kg atta aur...", "...milk chahiye"). A product phrase ends
/// at the first of these; they are never part of a product name.
static FILLER_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "aur", "और", "and", "or", "ya", "या", "bhi", "भी", "chahiye", "chaahiye", "चाहिए",
        "dena", "dedo", "देना", "please", "plz", "kripya", "कृपया",
    ])
});

/// Intermediate extraction result; never leaves this crate
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawToken {
    pub quantity: f64,
    /// Recognized unit word, verbatim; `None` means no unit was given
    /// and the item defaults to piece
    pub unit_text: Option<String>,
    /// Product phrase after boundary disambiguation and filler trimming
    pub product_text: String,
    /// Verbatim substring of the source text this token came from
    pub matched_text: String,
}

/// Extract raw tokens in order of appearance
///
/// A malformed candidate is dropped with a warning; it never aborts the
/// rest of the scan.
pub(crate) fn extract(text: &str) -> Vec<RawToken> {
    ORDER_PATTERN
        .captures_iter(text)
        .filter_map(|caps| token_from_captures(&caps, text))
        .collect()
}

/// `\d` in the order pattern matches any Unicode decimal digit, but
/// `f64::from_str` only accepts ASCII; fold digits like "२" to their
/// ASCII value so Devanagari-numeral quantities parse
fn fold_decimal_digits(raw: &str) -> String {
    raw.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_digit(d, 10).unwrap_or(c),
            None => c,
        })
        .collect()
}

fn token_from_captures(caps: &Captures<'_>, text: &str) -> Option<RawToken> {
    let full = caps.get(0)?;
    let quantity_str = caps.get(1)?.as_str();
    let product_cap = caps.get(3)?;

    let quantity = match fold_decimal_digits(quantity_str).parse::<f64>() {
        Ok(q) if q > 0.0 => q,
        Ok(_) => {
            warn!(quantity = quantity_str, "dropping token with non-positive quantity");
            return None;
        }
        Err(_) => {
            warn!(quantity = quantity_str, "invalid quantity, skipping token");
            return None;
        }
    };

    // Unit/product boundary heuristic: a captured unit candidate counts as
    // a unit only if the unit table recognizes it. Otherwise it was really
    // the first word of the product name ("1 lux soap") and is merged back
    // in, with the unit defaulting to piece. Known to mis-segment for
    // product names whose first word is also a unit spelling.
    let mut unit_text = None;
    let mut words: Vec<(usize, &str)> = Vec::new();
    if let Some(unit_cap) = caps.get(2) {
        if units::is_unit_word(unit_cap.as_str()) {
            unit_text = Some(unit_cap.as_str().to_string());
        } else {
            words.push((unit_cap.end(), unit_cap.as_str()));
        }
    }
    for word in WORD_PATTERN.find_iter(product_cap.as_str()) {
        words.push((product_cap.start() + word.end(), word.as_str()));
    }

    // The product phrase ends at the first filler word
    let mut kept: Vec<(usize, &str)> = Vec::new();
    for (end, word) in words {
        if FILLER_WORDS.contains(word.to_lowercase().as_str()) {
            break;
        }
        kept.push((end, word));
    }

    let Some(&(last_end, _)) = kept.last() else {
        debug!(matched = full.as_str(), "no product words left, skipping token");
        return None;
    };

    let product_text = kept
        .iter()
        .map(|(_, w)| *w)
        .collect::<Vec<_>>()
        .join(" ");
    let matched_text = text[full.start()..last_end].to_string();

    Some(RawToken {
        quantity,
        unit_text,
        product_text,
        matched_text,
    })
}
