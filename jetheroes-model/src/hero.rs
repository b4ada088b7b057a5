use jetheroes_types::HeroId;
use serde::{Deserialize, Serialize};

/// A hero as handed over by the data loader.
///
/// Immutable once loaded. `photo_url` is never interpreted here; it is passed
/// through untouched to whatever draws the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    #[serde(alias = "photoUrl")]
    pub photo_url: String,
}

impl Hero {
    pub fn new(id: HeroId, name: impl Into<String>, photo_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            photo_url: photo_url.into(),
        }
    }

    /// Case-folded name used for matching and ordering.
    pub fn folded_name(&self) -> String {
        fold_case(&self.name)
    }
}

/// Folds `s` so that case variants of the same text compare equal.
///
/// Works char by char, so folding commutes with taking substrings: if `a`
/// contains `b` then `fold_case(a)` contains `fold_case(b)`. Final sigma and
/// long s fold onto their ordinary forms, sharp s onto `ss`.
pub fn fold_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match c {
            'ς' => out.push('σ'),
            'ſ' => out.push('s'),
            'ß' => out.push_str("ss"),
            c => out.push(c),
        }
    }
    out
}
