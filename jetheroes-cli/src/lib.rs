//! Rendering and bundled data for the JetHeroes command line.

use jetheroes_model::{GroupedView, ListRow};
use jetheroes_search::SearchSnapshot;
use jetheroes_store::{HeroStore, StoreResult};
use serde::Serialize;

/// The hero table shipped with the binary.
pub const BUNDLED_HEROES: &str = include_str!("../data/heroes.json");

pub fn bundled_store() -> StoreResult<HeroStore> {
    HeroStore::from_json(BUNDLED_HEROES)
}

#[derive(Serialize, Debug)]
struct SnapshotJson<'a> {
    query: &'a str,
    revision: u64,
    groups: &'a GroupedView,
}

/// Renders a snapshot as a summary line followed by the header/hero rows.
pub fn render_text(snapshot: &SearchSnapshot) -> String {
    let view = &snapshot.view;
    let mut out = format!(
        "query {:?}: {} heroes in {} groups\n",
        snapshot.query,
        view.hero_count(),
        view.len()
    );
    for row in view.rows() {
        let line = match row {
            ListRow::Header(key) => format!("[{key}]\n"),
            ListRow::Hero(hero) => format!("  {}\n", hero.name),
        };
        out.push_str(&line);
    }
    out
}

pub fn render_json(snapshot: &SearchSnapshot) -> serde_json::Result<String> {
    serde_json::to_string(&SnapshotJson {
        query: &snapshot.query,
        revision: snapshot.revision,
        groups: &snapshot.view,
    })
}
