//! # Attribute Snapshots
//!
//! Point-in-time copy of everything the comparator ranks a connection by.
//!
//! Live connection state keeps changing while an eviction round runs. Ranking
//! the live objects directly would let the same pair compare differently on
//! two visits and break the heap. A snapshot is taken once per connection per
//! round; only the peer priority stays deferred, behind a run-once cache.

mod lazy;

pub use lazy::{LazyPriority, PriorityResult};

use crate::domain::{ConnectionId, DirectionPenalty, Timestamp};
use crate::ports::PeerConnection;

/// Ranking attributes of one connection, captured for one eviction round.
#[derive(Debug)]
pub struct AttributeSnapshot<'a> {
    /// Direction is disfavored by the round's penalty
    pub bad_direction: bool,
    /// Peer contributed data recently
    pub useful: bool,
    /// Last useful contribution (earlier = staler = worse)
    pub last_helpful: Timestamp,
    /// Handshake completion (later = less proven = worse)
    pub completed_handshake: Timestamp,
    /// External score, fetched on demand at most once
    pub priority: LazyPriority<'a>,
    /// Final tie-break
    pub identity: ConnectionId,
}

impl<'a> AttributeSnapshot<'a> {
    /// Capture `conn` under `penalty`.
    ///
    /// Reads every attribute now except the priority, which borrows `conn`
    /// and is fetched the first time a comparison reaches it.
    pub fn capture<C>(conn: &'a C, penalty: DirectionPenalty) -> Self
    where
        C: PeerConnection + Sync + ?Sized,
    {
        Self {
            bad_direction: penalty.is_bad(conn.direction()),
            useful: conn.is_useful(),
            last_helpful: conn.last_helpful(),
            completed_handshake: conn.completed_handshake(),
            priority: LazyPriority::new(move || conn.peer_priority()),
            identity: conn.connection_id(),
        }
    }
}
