//! Product catalog configuration
//!
//! The catalog is an ordered list of canonical products, each with its known
//! alias spellings (transliterations and Devanagari variants). Iteration
//! order is a documented contract: the product matcher's alias phase is
//! first-match in declaration order, so reordering entries changes which
//! canonical name wins for overlapping aliases.
//!
//! Built once at process start, read-only thereafter.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::ConfigError;

/// One canonical product and its alias spellings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntry {
    /// Canonical product name (unique across the catalog, lowercase)
    pub name: String,
    /// Known alternate spellings, checked in declaration order
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl ProductEntry {
    fn new(name: &str, aliases: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Ordered product catalog loaded from catalog.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub products: Vec<ProductEntry>,
}

impl Default for CatalogConfig {
    /// Built-in catalog of staples a kirana store stocks, with common
    /// Hinglish transliterations and Devanagari spellings
    fn default() -> Self {
        Self {
            products: vec![
                ProductEntry::new("atta", &["aata", "आटा", "flour"]),
                ProductEntry::new("milk", &["doodh", "दूध"]),
                ProductEntry::new("rice", &["chawal", "चावल"]),
                ProductEntry::new("sugar", &["cheeni", "चीनी"]),
                ProductEntry::new("oil", &["tel", "तेल"]),
                ProductEntry::new("dal", &["daal", "दाल", "lentils"]),
                ProductEntry::new("salt", &["namak", "नमक"]),
                ProductEntry::new("tea", &["chai", "चाय"]),
                ProductEntry::new("biscuit", &["biskut", "बिस्कुट"]),
            ],
        }
    }
}

impl CatalogConfig {
    /// Load from a YAML file and validate
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::FileNotFound(format!("{}: {}", path.as_ref().display(), e))
        })?;

        let catalog: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        catalog.validate()?;

        tracing::info!(products = catalog.products.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Validate catalog invariants; a corrupted table aborts startup,
    /// never a per-message call
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.products {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "products.name".to_string(),
                    message: "canonical name must not be empty".to_string(),
                });
            }
            if !seen.insert(entry.name.to_lowercase()) {
                return Err(ConfigError::InvalidValue {
                    field: "products.name".to_string(),
                    message: format!("duplicate canonical name '{}'", entry.name),
                });
            }
        }
        Ok(())
    }

    /// Canonical names in declaration order (the flat fallback search space)
    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = CatalogConfig::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.products.len(), 9);
    }

    #[test]
    fn test_canonical_names_preserve_order() {
        let catalog = CatalogConfig::default();
        let names: Vec<&str> = catalog.canonical_names().collect();
        assert_eq!(names[0], "atta");
        assert_eq!(names[8], "biscuit");
    }

    #[test]
    fn test_yaml_deserialization_preserves_order() {
        let yaml = r#"
products:
  - name: milk
    aliases: ["doodh", "दूध"]
  - name: bread
"#;
        let catalog: CatalogConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.products[0].name, "milk");
        assert_eq!(catalog.products[0].aliases, vec!["doodh", "दूध"]);
        // aliases default to empty when omitted
        assert!(catalog.products[1].aliases.is_empty());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let yaml = r#"
products:
  - name: milk
  - name: Milk
"#;
        let catalog: CatalogConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let catalog = CatalogConfig {
            products: vec![ProductEntry::new("", &[])],
        };
        assert!(catalog.validate().is_err());
    }
}
