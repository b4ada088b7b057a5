//! Hero store for JetHeroes.
//!
//! Holds the fixed, already-loaded hero table the search engine reads from.
//!
//! # Architecture
//!
//! - [`HeroSource`] is the read-only seam the engine depends on
//! - [`HeroStore`] is the in-memory implementation, built from a `Vec` or a
//!   JSON array of heroes
//! - Id uniqueness is checked once at construction; nothing mutates the
//!   table afterwards

mod error;
mod hero_store;

pub use error::{StoreError, StoreResult};
pub use hero_store::{HeroSource, HeroStore};
