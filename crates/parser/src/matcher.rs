//! Fuzzy product matching against the catalog
//!
//! Two-phase resolution:
//! 1. Alias phase: first alias across catalog entries, in declaration
//!    order, whose score clears the threshold wins. This is deliberately
//!    first-match rather than best-match; the table order is part of the
//!    behavioral contract for overlapping aliases.
//! 2. Catalog fallback: best-scoring canonical name at or above the
//!    threshold, earlier entries winning ties.
//!
//! When neither phase matches, the input passes through lowercased so the
//! inventory layer can report "not found" per item instead of the parser
//! silently dropping it.

use kirana_agent_config::CatalogConfig;
use tracing::debug;

use crate::similarity::ratio;

/// Resolves raw product phrases to canonical catalog names
///
/// Pure and stateless beyond the read-only catalog; safe to call
/// concurrently without coordination.
pub struct ProductMatcher {
    catalog: CatalogConfig,
    threshold: u8,
}

impl Default for ProductMatcher {
    fn default() -> Self {
        Self::new(CatalogConfig::default(), 70)
    }
}

impl ProductMatcher {
    /// Create a matcher over a catalog with a minimum similarity score
    /// (0-100, inclusive boundary)
    pub fn new(catalog: CatalogConfig, threshold: u8) -> Self {
        Self { catalog, threshold }
    }

    /// Resolve a raw product phrase to a canonical name, or pass it
    /// through lowercased and trimmed when nothing matches
    pub fn resolve(&self, raw: &str) -> String {
        let needle = raw.trim().to_lowercase();
        let cutoff = self.threshold as f64;

        // Alias phase: first match wins, in table order
        for entry in &self.catalog.products {
            for alias in &entry.aliases {
                let score = ratio(&needle, &alias.to_lowercase());
                if score >= cutoff {
                    debug!(%needle, alias = %alias, canonical = %entry.name, score, "alias match");
                    return entry.name.clone();
                }
            }
        }

        // Catalog fallback: best match, earlier entries win ties
        let mut best: Option<(&str, f64)> = None;
        for entry in &self.catalog.products {
            let score = ratio(&needle, &entry.name.to_lowercase());
            if score >= cutoff && best.map_or(true, |(_, s)| score > s) {
                best = Some((entry.name.as_str(), score));
            }
        }
        if let Some((name, score)) = best {
            debug!(%needle, canonical = %name, score, "catalog match");
            return name.to_string();
        }

        debug!(%needle, "no catalog match, passing through");
        needle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kirana_agent_config::ProductEntry;

    fn matcher() -> ProductMatcher {
        ProductMatcher::default()
    }

    #[test]
    fn test_alias_exact_matches() {
        let m = matcher();
        assert_eq!(m.resolve("doodh"), "milk");
        assert_eq!(m.resolve("chawal"), "rice");
        assert_eq!(m.resolve("cheeni"), "sugar");
    }

    #[test]
    fn test_devanagari_aliases() {
        let m = matcher();
        assert_eq!(m.resolve("दूध"), "milk");
        assert_eq!(m.resolve("आटा"), "atta");
        assert_eq!(m.resolve("चाय"), "tea");
    }

    #[test]
    fn test_near_exact_alias_match() {
        let m = matcher();
        // ratio("atta", "aata") = 75 >= 70
        assert_eq!(m.resolve("atta"), "atta");
        assert_eq!(m.resolve("biskut"), "biscuit");
    }

    #[test]
    fn test_canonical_name_via_fallback() {
        let m = matcher();
        // "milk" is not an alias of anything; the fallback phase finds it
        assert_eq!(m.resolve("milk"), "milk");
        assert_eq!(m.resolve("sugar"), "sugar");
    }

    #[test]
    fn test_trims_and_lowercases_input() {
        let m = matcher();
        assert_eq!(m.resolve("  Doodh "), "milk");
    }

    #[test]
    fn test_unknown_product_passthrough() {
        let m = matcher();
        assert_eq!(m.resolve("xyzzy123"), "xyzzy123");
        assert_eq!(m.resolve("  Bread "), "bread");
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        let catalog = CatalogConfig {
            products: vec![ProductEntry {
                name: "atta".to_string(),
                aliases: vec!["aata".to_string()],
            }],
        };
        // ratio("atta", "aata") is exactly 75
        let m = ProductMatcher::new(catalog.clone(), 75);
        assert_eq!(m.resolve("atta"), "atta");

        let strict = ProductMatcher::new(catalog, 76);
        // Fallback still resolves via the canonical name at 100
        assert_eq!(strict.resolve("atta"), "atta");
        assert_eq!(strict.resolve("aata"), "atta".to_string());
    }

    #[test]
    fn test_fallback_tie_breaks_to_first_entry() {
        let catalog = CatalogConfig {
            products: vec![
                ProductEntry {
                    name: "cat".to_string(),
                    aliases: vec![],
                },
                ProductEntry {
                    name: "bat".to_string(),
                    aliases: vec![],
                },
            ],
        };
        // ratio("rat", "cat") == ratio("rat", "bat") == 66.67
        let m = ProductMatcher::new(catalog, 60);
        assert_eq!(m.resolve("rat"), "cat");
    }

    #[test]
    fn test_alias_phase_is_first_match_in_table_order() {
        // Both entries carry the same alias; the earlier entry must win
        let catalog = CatalogConfig {
            products: vec![
                ProductEntry {
                    name: "dal".to_string(),
                    aliases: vec!["daal".to_string()],
                },
                ProductEntry {
                    name: "lentil-mix".to_string(),
                    aliases: vec!["daal".to_string()],
                },
            ],
        };
        let m = ProductMatcher::new(catalog, 70);
        assert_eq!(m.resolve("daal"), "dal");
    }
}
