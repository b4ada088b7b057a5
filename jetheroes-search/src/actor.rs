//! Single owning task for a [`SearchEngine`].
//!
//! Query events from any number of tasks are queued on a bounded channel and
//! applied one at a time in arrival order, so the last event sent is the one
//! whose view ends up published.

use crate::engine::{SearchEngine, SearchSnapshot};
use crate::error::{SearchError, SearchResult};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::debug;

/// Configuration for the search actor.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum queued query events before senders wait.
    pub queue_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { queue_capacity: 64 }
    }
}

/// Spawns the task that owns a search engine.
pub struct SearchActor;

impl SearchActor {
    /// Moves `engine` onto a tokio task and returns a handle to it.
    ///
    /// The task exits once every [`SearchHandle`] is dropped. Must be called
    /// from within a tokio runtime.
    pub fn spawn(mut engine: SearchEngine, config: SearchConfig) -> SearchHandle {
        let (tx, mut rx) = mpsc::channel::<String>(config.queue_capacity.max(1));
        let snapshots = engine.subscribe();

        tokio::spawn(async move {
            while let Some(query) = rx.recv().await {
                engine.set_query(query);
            }
            debug!("Search actor stopped");
        });

        SearchHandle { tx, snapshots }
    }
}

/// Cloneable handle for sending queries to, and observing, a running actor.
#[derive(Clone)]
pub struct SearchHandle {
    tx: mpsc::Sender<String>,
    snapshots: watch::Receiver<Arc<SearchSnapshot>>,
}

impl SearchHandle {
    /// Queues a query change, waiting for room if the queue is full.
    pub async fn set_query(&self, query: impl Into<String>) -> SearchResult<()> {
        self.tx
            .send(query.into())
            .await
            .map_err(|_| SearchError::ActorStopped)
    }

    /// Queues a query change without waiting.
    pub fn try_set_query(&self, query: impl Into<String>) -> SearchResult<()> {
        self.tx.try_send(query.into()).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => SearchError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => SearchError::ActorStopped,
        })
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> Arc<SearchSnapshot> {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<SearchSnapshot>> {
        self.snapshots.clone()
    }

    /// Waits until a snapshot at or past `revision` is published.
    pub async fn wait_for_revision(&self, revision: u64) -> SearchResult<Arc<SearchSnapshot>> {
        let mut rx = self.snapshots.clone();
        let snapshot = rx
            .wait_for(|s| s.revision >= revision)
            .await
            .map_err(|_| SearchError::ActorStopped)?;
        Ok(snapshot.clone())
    }
}
