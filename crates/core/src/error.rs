//! Error types shared across the agent crates
//!
//! Note that order parsing itself is infallible by contract: malformed input
//! degrades per token and always yields a structurally valid `ParsedOrder`.
//! These errors cover startup configuration and the outer collaborators.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Inventory error: {0}")]
    Inventory(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
