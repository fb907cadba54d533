//! Value objects for eviction ranking.

use serde::{Deserialize, Serialize};

/// Direction of a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionDirection {
    /// We dialed the peer
    Outbound,
    /// The peer dialed us
    Inbound,
}

impl ConnectionDirection {
    pub fn is_outbound(&self) -> bool {
        matches!(self, Self::Outbound)
    }

    pub fn is_inbound(&self) -> bool {
        matches!(self, Self::Inbound)
    }
}

/// Which connection directions are disfavored for retention.
///
/// Both flags are independent. Setting both penalizes every connection
/// equally, which makes the penalty a no-op; callers normally set at most one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionPenalty {
    /// Inbound connections rank worse
    pub incoming_is_bad: bool,
    /// Outbound connections rank worse
    pub outgoing_is_bad: bool,
}

impl DirectionPenalty {
    /// No direction is penalized.
    pub const fn none() -> Self {
        Self {
            incoming_is_bad: false,
            outgoing_is_bad: false,
        }
    }

    /// Penalize inbound connections.
    pub const fn incoming() -> Self {
        Self {
            incoming_is_bad: true,
            outgoing_is_bad: false,
        }
    }

    /// Penalize outbound connections.
    pub const fn outgoing() -> Self {
        Self {
            incoming_is_bad: false,
            outgoing_is_bad: true,
        }
    }

    /// Whether a connection in `direction` is penalized.
    pub fn is_bad(&self, direction: ConnectionDirection) -> bool {
        match direction {
            ConnectionDirection::Inbound => self.incoming_is_bad,
            ConnectionDirection::Outbound => self.outgoing_is_bad,
        }
    }
}
