use crate::{StoreError, StoreResult};
use jetheroes_model::Hero;
use jetheroes_types::HeroId;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Read-only access to the full hero table.
///
/// Implementations must return the same heroes, in the same stored order, on
/// every call.
pub trait HeroSource: Send + Sync {
    /// Every known hero in stored (insertion) order.
    fn list_all(&self) -> &[Hero];
}

/// In-memory hero table.
#[derive(Debug, Clone, Default)]
pub struct HeroStore {
    heroes: Vec<Hero>,
    by_id: HashMap<HeroId, usize>,
}

impl HeroStore {
    /// Builds a store, rejecting duplicate ids.
    pub fn new(heroes: Vec<Hero>) -> StoreResult<Self> {
        let mut by_id = HashMap::with_capacity(heroes.len());
        for (idx, hero) in heroes.iter().enumerate() {
            if by_id.insert(hero.id.clone(), idx).is_some() {
                return Err(StoreError::DuplicateId(hero.id.clone()));
            }
        }
        Ok(Self { heroes, by_id })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a JSON array of heroes.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> StoreResult<Self> {
        Self::new(serde_json::from_reader(reader)?)
    }

    /// Loads a JSON hero table from disk.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let file = std::fs::File::open(path)?;
        let store = Self::from_reader(std::io::BufReader::new(file))?;
        info!("Loaded {} heroes from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn get(&self, id: &HeroId) -> Option<&Hero> {
        self.by_id.get(id).map(|&idx| &self.heroes[idx])
    }
}

impl HeroSource for HeroStore {
    fn list_all(&self) -> &[Hero] {
        &self.heroes
    }
}
