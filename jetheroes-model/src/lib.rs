//! Hero model for JetHeroes.
//!
//! Defines the values that flow between the store, the search engine and the
//! rendering layer:
//! - [`Hero`] — one displayable record (id, name, image reference)
//! - [`GroupKey`] — the normalized first character a hero is filed under
//! - [`GroupedView`] — ordered groups of heroes produced for a query
//! - [`ListRow`] — the flattened header/item rows a list renderer lays out

mod hero;
mod view;

pub use hero::{Hero, fold_case};
pub use jetheroes_types::HeroId;
pub use view::{GroupKey, GroupedView, HeroGroup, ListRow, RowKey};
