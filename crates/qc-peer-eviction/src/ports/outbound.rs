//! Outbound Ports (Driven Ports / SPI)

use crate::domain::{ConnectionDirection, ConnectionId, PeerPriority, PriorityError, Timestamp};

/// Read-only view of a live peer connection.
///
/// Everything except [`peer_priority`](Self::peer_priority) is read exactly
/// once when a snapshot is captured. The priority is fetched lazily, at most
/// once per snapshot, and only if a comparison needs it.
pub trait PeerConnection {
    /// Who dialed whom.
    fn direction(&self) -> ConnectionDirection;

    /// Whether the peer has contributed data recently.
    fn is_useful(&self) -> bool;

    /// Last time the peer sent us something useful (`Timestamp::ZERO` if never).
    fn last_helpful(&self) -> Timestamp;

    /// When the protocol handshake completed.
    fn completed_handshake(&self) -> Timestamp;

    /// Compute the external priority score.
    ///
    /// May be slow or fail; eviction treats a failure as "no information".
    fn peer_priority(&self) -> Result<PeerPriority, PriorityError>;

    /// Identity used as the last tie-break. Defaults to the object's address.
    fn connection_id(&self) -> ConnectionId {
        ConnectionId::of(self)
    }
}

impl<T: PeerConnection + ?Sized> PeerConnection for std::sync::Arc<T> {
    fn direction(&self) -> ConnectionDirection {
        (**self).direction()
    }

    fn is_useful(&self) -> bool {
        (**self).is_useful()
    }

    fn last_helpful(&self) -> Timestamp {
        (**self).last_helpful()
    }

    fn completed_handshake(&self) -> Timestamp {
        (**self).completed_handshake()
    }

    fn peer_priority(&self) -> Result<PeerPriority, PriorityError> {
        (**self).peer_priority()
    }

    fn connection_id(&self) -> ConnectionId {
        (**self).connection_id()
    }
}
