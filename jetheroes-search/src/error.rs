//! Error types for the search actor.
//!
//! The engine itself never fails; only handing work to a stopped or saturated
//! actor does.

use thiserror::Error;

pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The actor task has exited, so no further queries can be applied.
    #[error("search actor stopped")]
    ActorStopped,

    /// The query queue is at capacity.
    #[error("search queue full")]
    QueueFull,
}
