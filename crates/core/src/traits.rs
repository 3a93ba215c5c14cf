//! Collaborator traits for the outer layers
//!
//! The parsing core is pure and synchronous; everything that touches the
//! outside world (stock database, WhatsApp channel) sits behind these
//! traits so it can be swapped and mocked. The webhook/invoice layers own
//! the implementations.

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single inventory record, keyed by lowercased product name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    /// Unit the stock level is counted in (canonical short form)
    pub unit: String,
    pub stock: f64,
    /// Unit price in rupees
    pub price: f64,
    /// GST rate as a percentage
    #[serde(default)]
    pub gst_rate: f64,
}

/// Inventory lookup and stock adjustment
///
/// Lookup is by the parsed item's `name` field. The product matcher's
/// passthrough behavior exists so that an unknown product reaches this
/// lookup and fails gracefully per item ("not found") instead of the
/// parser silently dropping it.
#[async_trait]
pub trait InventoryStore: Send + Sync + 'static {
    /// Fetch an item by name (case-insensitive); `None` when unknown
    async fn item_by_name(&self, name: &str) -> Result<Option<StockItem>>;

    /// Apply a signed stock change (negative for an order).
    /// Returns `false` when the item does not exist.
    async fn adjust_stock(&self, name: &str, change: f64) -> Result<bool>;
}

/// Outbound message channel back to the customer
#[async_trait]
pub trait MessageTransport: Send + Sync + 'static {
    /// Deliver a composed reply to the customer's phone number
    async fn send_reply(&self, phone: &str, text: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct InMemoryInventory {
        items: Mutex<HashMap<String, StockItem>>,
    }

    impl InMemoryInventory {
        fn with_items(items: Vec<StockItem>) -> Self {
            let map = items
                .into_iter()
                .map(|i| (i.name.to_lowercase(), i))
                .collect();
            Self {
                items: Mutex::new(map),
            }
        }
    }

    #[async_trait]
    impl InventoryStore for InMemoryInventory {
        async fn item_by_name(&self, name: &str) -> Result<Option<StockItem>> {
            let items = self
                .items
                .lock()
                .map_err(|e| crate::Error::Inventory(e.to_string()))?;
            Ok(items.get(&name.to_lowercase()).cloned())
        }

        async fn adjust_stock(&self, name: &str, change: f64) -> Result<bool> {
            let mut items = self
                .items
                .lock()
                .map_err(|e| crate::Error::Inventory(e.to_string()))?;
            match items.get_mut(&name.to_lowercase()) {
                Some(item) => {
                    item.stock += change;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    fn atta() -> StockItem {
        StockItem {
            name: "atta".to_string(),
            brand: Some("Aashirvaad".to_string()),
            unit: "kg".to_string(),
            stock: 25.0,
            price: 45.0,
            gst_rate: 5.0,
        }
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let store = InMemoryInventory::with_items(vec![atta()]);
        let found = store.item_by_name("Atta").await.unwrap();
        assert_eq!(found.unwrap().price, 45.0);
    }

    #[tokio::test]
    async fn test_unknown_product_is_none_not_error() {
        let store = InMemoryInventory::with_items(vec![atta()]);
        // Passthrough names from the matcher land here and must fail softly
        assert!(store.item_by_name("xyzzy123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_adjust_stock_for_order() {
        let store = InMemoryInventory::with_items(vec![atta()]);
        assert!(store.adjust_stock("atta", -2.0).await.unwrap());
        let item = store.item_by_name("atta").await.unwrap().unwrap();
        assert_eq!(item.stock, 23.0);

        assert!(!store.adjust_stock("bread", -1.0).await.unwrap());
    }
}
