//! Search engine — owns the query and publishes the derived view.
//!
//! Every `set_query` recomputes the view synchronously and publishes the
//! query and view together as one [`SearchSnapshot`]. Readers holding a
//! receiver therefore never observe a view computed from a different query.

use crate::group::build_view;
use jetheroes_model::GroupedView;
use jetheroes_store::HeroSource;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// A query and the view computed from it, published as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub query: String,
    pub view: GroupedView,
    /// Number of `set_query` calls applied so far; 0 for the initial view.
    pub revision: u64,
}

/// Filters and groups heroes for the current query.
///
/// Single writer: mutation requires `&mut self`. Share the engine across
/// tasks through [`SearchActor`](crate::SearchActor) rather than a lock.
pub struct SearchEngine {
    source: Arc<dyn HeroSource>,
    state: watch::Sender<Arc<SearchSnapshot>>,
}

impl SearchEngine {
    /// Creates an engine with an empty query, so the initial view holds every hero.
    pub fn new(source: Arc<dyn HeroSource>) -> Self {
        let initial = SearchSnapshot {
            query: String::new(),
            view: build_view(source.list_all(), ""),
            revision: 0,
        };
        let (state, _) = watch::channel(Arc::new(initial));
        Self { source, state }
    }

    /// Replaces the query and recomputes the view.
    ///
    /// No trimming or validation: any string, including empty, is accepted.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        let view = build_view(self.source.list_all(), &query);
        let revision = self.state.borrow().revision + 1;
        debug!(
            query = %query,
            groups = view.len(),
            matches = view.hero_count(),
            revision,
            "Recomputed grouped view"
        );
        self.state.send_replace(Arc::new(SearchSnapshot {
            query,
            view,
            revision,
        }));
    }

    pub fn current_query(&self) -> String {
        self.state.borrow().query.clone()
    }

    /// The view for the most recent `set_query`.
    pub fn current_grouped_view(&self) -> GroupedView {
        self.state.borrow().view.clone()
    }

    /// The current query and view as one consistent pair.
    pub fn snapshot(&self) -> Arc<SearchSnapshot> {
        self.state.borrow().clone()
    }

    /// Subscribes to snapshot updates. The receiver starts at the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SearchSnapshot>> {
        self.state.subscribe()
    }

    pub fn source(&self) -> &Arc<dyn HeroSource> {
        &self.source
    }
}
