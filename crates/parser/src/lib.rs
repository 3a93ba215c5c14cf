//! Hinglish Order Parsing Pipeline
//!
//! This crate turns free-form, mixed-script (Latin + Devanagari) customer
//! messages into structured orders:
//! - **Extraction**: scan for quantity / unit / product triples
//! - **Unit Normalization**: map raw unit spellings to canonical units
//! - **Product Matching**: resolve product phrases against the catalog
//!   via alias lookup and fuzzy scoring
//! - **Reply Composition**: render a confirmation message for the customer
//!
//! The whole pipeline is pure and synchronous over read-only tables, so it
//! can run concurrently from any number of workers without locks.
//!
//! # Example
//!
//! ```
//! use kirana_agent_parser::{compose_reply, OrderParser};
//!
//! let parser = OrderParser::default();
//! let order = parser.parse("2 kg atta aur 1 litre milk chahiye");
//! assert_eq!(order.total_items, 2);
//!
//! let reply = compose_reply(&order, "Rajesh");
//! assert!(reply.starts_with("Thank you Rajesh!"));
//! ```

mod extract;
pub mod matcher;
mod parser;
pub mod reply;
pub mod similarity;
pub mod units;

pub use matcher::ProductMatcher;
pub use parser::OrderParser;
pub use reply::compose_reply;
pub use similarity::ratio;
pub use units::normalize_unit;
