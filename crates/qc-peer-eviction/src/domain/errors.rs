//! Error types for eviction ranking

use thiserror::Error;

use super::entities::ConnectionId;

/// Errors reported by the comparator and the worst-first selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvictionError {
    /// `pop_worst` called with no connections left
    #[error("Selection is empty: no connection left to evict")]
    EmptySelection,

    /// No criterion, not even identity, could order the pair.
    /// Only happens when both entries refer to the same connection.
    #[error("Cannot differentiate {left} and {right}")]
    Indistinguishable {
        left: ConnectionId,
        right: ConnectionId,
    },
}

/// Failure of the external peer priority computation.
///
/// Cached per snapshot and treated as neutral by the comparator; never
/// surfaced through comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriorityError {
    /// Local or remote address needed for the score is unknown
    #[error("Peer address unavailable")]
    AddressUnavailable,

    /// Any other failure of the priority source
    #[error("Priority computation failed: {0}")]
    Failed(String),
}
