//! Identifier types for heroes.
//!
//! Ids are opaque strings assigned by whoever loads the hero table. They are
//! the only stable key across re-renders; nothing derives identity from a
//! hero's name.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a hero.
///
/// Serialized as a plain string; deserialization goes through [`HeroId::parse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HeroId(String);

impl HeroId {
    /// Parses a hero ID, rejecting empty or whitespace-only input.
    pub fn parse(s: &str) -> Result<Self> {
        Self::try_from(s.to_string())
    }

    /// Mints a fresh time-ordered ID for loaders with no natural key.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HeroId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HeroId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(Error::InvalidId(s));
        }
        Ok(Self(s))
    }
}

impl From<HeroId> for String {
    fn from(id: HeroId) -> Self {
        id.0
    }
}

impl From<u64> for HeroId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl AsRef<str> for HeroId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
