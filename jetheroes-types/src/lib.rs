//! Core type definitions for JetHeroes.
//!
//! This crate defines the identifier and error types shared by the hero
//! model, the store and the search engine:
//! - Hero identifiers ([`HeroId`])
//! - The crate-wide [`Error`] and [`Result`] alias

mod ids;

pub use ids::HeroId;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid hero id: {0:?}")]
    InvalidId(String),
}
