//! Core entities: time, identity and priority of a peer connection.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock instant with millisecond resolution.
///
/// `Timestamp::ZERO` stands for "never" (e.g. a peer that has not yet been
/// helpful), which sorts before every real instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The "never happened" instant.
    pub const ZERO: Self = Self(0);

    /// Create a timestamp from milliseconds since the UNIX epoch.
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Convert a `SystemTime`; instants before the epoch clamp to `ZERO`.
    pub fn from_system_time(time: SystemTime) -> Self {
        time.duration_since(UNIX_EPOCH)
            .map(|d| Self(u64::try_from(d.as_millis()).unwrap_or(u64::MAX)))
            .unwrap_or(Self::ZERO)
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    /// Milliseconds since the UNIX epoch.
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Add milliseconds (saturating).
    pub fn add_millis(&self, millis: u64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    /// Subtract milliseconds (saturating at `ZERO`).
    pub fn sub_millis(&self, millis: u64) -> Self {
        Self(self.0.saturating_sub(millis))
    }

    /// Signed distance `self - other` in milliseconds.
    ///
    /// Negative when `self` is earlier than `other`.
    pub fn signed_millis_since(&self, other: Timestamp) -> i64 {
        let delta = i128::from(self.0) - i128::from(other.0);
        delta.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }
}

/// Opaque identity of one connection object.
///
/// Only ever compared; never dereferenced. The default derivation is the
/// connection's address in memory, which is unique for as long as the
/// connection is borrowed by an eviction round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConnectionId(usize);

impl ConnectionId {
    /// Wrap a caller-chosen raw token.
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Identity from the address of `value`.
    ///
    /// Zero-sized types share addresses; such connection types must override
    /// [`PeerConnection::connection_id`](crate::ports::PeerConnection::connection_id).
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self(value as *const T as *const () as usize)
    }

    /// The raw token.
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn#{:x}", self.0)
    }
}

/// Externally computed peer ranking score. Lower is worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PeerPriority(u32);

impl PeerPriority {
    /// Wrap a raw priority value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw priority value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for PeerPriority {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for PeerPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
