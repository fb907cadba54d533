//! # Peer Connection Eviction Ranking
//!
//! Decides which of the currently open peer connections is the "worst", i.e.
//! the first one to close when the connection budget is exceeded, and
//! hands candidates out worst-first.
//!
//! ## Architecture
//!
//! - **Domain Layer:** snapshots, the worse-than criteria chain, the
//!   worst-first heap
//! - **Ports Layer:** [`PeerConnection`], the read-only view of a live
//!   connection supplied by the wire protocol
//! - **Config:** [`EvictionConfig`] (TOML)
//!
//! Closing connections, deciding when to evict and how many to keep are
//! the caller's business.
//!
//! ## Ranking
//!
//! Worst first, each criterion consulted only if all previous ones tie:
//!
//! 1. connection direction penalized by the round's [`DirectionPenalty`]
//! 2. not useful
//! 3. helped us longest ago
//! 4. most recent handshake
//! 5. lowest external priority (fetched lazily, at most once per snapshot;
//!    a failed fetch ties)
//! 6. connection identity
//!
//! ## Example
//!
//! ```rust
//! use qc_peer_eviction::{
//!     ConnectionDirection, DirectionPenalty, PeerConnection, PeerPriority, PriorityError,
//!     Timestamp, WorstFirst,
//! };
//!
//! struct Conn {
//!     inbound: bool,
//!     useful: bool,
//! }
//!
//! impl PeerConnection for Conn {
//!     fn direction(&self) -> ConnectionDirection {
//!         if self.inbound {
//!             ConnectionDirection::Inbound
//!         } else {
//!             ConnectionDirection::Outbound
//!         }
//!     }
//!     fn is_useful(&self) -> bool {
//!         self.useful
//!     }
//!     fn last_helpful(&self) -> Timestamp {
//!         Timestamp::ZERO
//!     }
//!     fn completed_handshake(&self) -> Timestamp {
//!         Timestamp::from_millis(1_000)
//!     }
//!     fn peer_priority(&self) -> Result<PeerPriority, PriorityError> {
//!         Ok(PeerPriority::new(0))
//!     }
//! }
//!
//! let conns = vec![
//!     Conn { inbound: false, useful: true },
//!     Conn { inbound: true, useful: true },
//!     Conn { inbound: false, useful: false },
//! ];
//!
//! // Keep two connections; inbound ones go first.
//! let mut round = WorstFirst::new(&conns, DirectionPenalty::incoming());
//! let evicted = round.pop_until(2);
//!
//! assert_eq!(evicted.len(), 1);
//! assert!(evicted[0].inbound);
//! ```

pub mod config;
pub mod domain;
pub mod ports;

// Domain entities and value objects
pub use domain::{
    AttributeSnapshot, ConnectionDirection, ConnectionId, DirectionPenalty, EvictionError,
    LazyPriority, PeerPriority, PriorityError, PriorityResult, Timestamp,
};

// Comparator
pub use domain::{is_worse, try_is_worse, worse_conn, Criterion, CriterionFn, Verdict, CRITERIA};

// Selection
pub use domain::WorstFirst;

// Port traits
pub use ports::PeerConnection;

// Configuration
pub use config::{ConfigError, EvictionConfig};
