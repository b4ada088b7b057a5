//! Search-and-group engine for JetHeroes.
//!
//! Turns a query string and the fixed hero table into a [`GroupedView`]:
//! heroes whose name contains the query (case-insensitively), filed under
//! their upper-cased first letter, groups and members both sorted.
//!
//! - [`build_view`] is the pure pipeline: filter, group, sort keys, sort members
//! - [`SearchEngine`] owns the query and republishes a [`SearchSnapshot`] on
//!   every change
//! - [`SearchActor`] serializes query updates from many tasks onto one engine
//!
//! [`GroupedView`]: jetheroes_model::GroupedView

mod actor;
mod engine;
mod error;
mod group;

pub use actor::{SearchActor, SearchConfig, SearchHandle};
pub use engine::{SearchEngine, SearchSnapshot};
pub use error::{SearchError, SearchResult};
pub use group::{QueryMatcher, build_view, matches_query};
