//! Core types and traits for the kirana order agent
//!
//! This crate provides foundational types used across the other crates:
//! - Order domain types (`CanonicalUnit`, `ParsedItem`, `ParsedOrder`)
//! - Collaborator traits for the outer layers (`InventoryStore`, `MessageTransport`)
//! - Error types

pub mod error;
pub mod order;
pub mod traits;

pub use error::{Error, Result};
pub use order::{CanonicalUnit, ParsedItem, ParsedOrder};
pub use traits::{InventoryStore, MessageTransport, StockItem};
