use crate::Hero;
use jetheroes_types::HeroId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The header a hero is filed under: its name's first character, upper-cased.
///
/// Held as a string because upper-casing a single `char` can expand
/// (`ß` becomes `SS`). Digits and symbols are their own keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupKey(String);

impl GroupKey {
    /// Derives the key for a name. `None` when the name is empty.
    pub fn of(name: &str) -> Option<Self> {
        name.chars()
            .next()
            .map(|first| Self(first.to_uppercase().collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One sticky-header section: a key and its heroes in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroGroup {
    pub key: GroupKey,
    pub heroes: Vec<Hero>,
}

/// Ordered groups of heroes matching a query.
///
/// Groups are sorted by key and never empty; heroes within a group are sorted
/// by name, case-insensitively. Built by the search engine, never edited in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupedView {
    groups: Vec<HeroGroup>,
}

impl GroupedView {
    /// Wraps groups that already satisfy the ordering rules.
    pub fn from_groups(groups: Vec<HeroGroup>) -> Self {
        debug_assert!(groups.windows(2).all(|w| w[0].key < w[1].key));
        debug_assert!(groups.iter().all(|g| !g.heroes.is_empty()));
        Self { groups }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[HeroGroup] {
        &self.groups
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total heroes across every group.
    pub fn hero_count(&self) -> usize {
        self.groups.iter().map(|g| g.heroes.len()).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.groups.iter().map(|g| &g.key)
    }

    /// Heroes filed under `key`, if that group is present.
    pub fn get(&self, key: &GroupKey) -> Option<&[Hero]> {
        self.groups
            .binary_search_by(|g| g.key.cmp(key))
            .ok()
            .map(|i| self.groups[i].heroes.as_slice())
    }

    /// Every hero in display order.
    pub fn heroes(&self) -> impl Iterator<Item = &Hero> {
        self.groups.iter().flat_map(|g| g.heroes.iter())
    }

    pub fn contains(&self, id: &HeroId) -> bool {
        self.heroes().any(|h| &h.id == id)
    }

    /// Flattens the view into list rows: each group's header followed by its heroes.
    pub fn rows(&self) -> impl Iterator<Item = ListRow<'_>> {
        self.groups.iter().flat_map(|g| {
            std::iter::once(ListRow::Header(&g.key)).chain(g.heroes.iter().map(ListRow::Hero))
        })
    }
}

/// A single row in the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRow<'a> {
    Header(&'a GroupKey),
    Hero(&'a Hero),
}

impl ListRow<'_> {
    /// Stable identity for this row across re-renders.
    pub fn key(&self) -> RowKey {
        match self {
            ListRow::Header(key) => RowKey(format!("header:{key}")),
            ListRow::Hero(hero) => RowKey(format!("hero:{}", hero.id)),
        }
    }
}

/// Render identity of a [`ListRow`]: groups are keyed by [`GroupKey`], heroes by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey(String);

impl RowKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
