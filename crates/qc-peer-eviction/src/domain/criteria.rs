//! # Worse-Than Comparator
//!
//! Lexicographic chain of criteria over two snapshots. The first criterion
//! that tells the pair apart decides; later ones (in particular the lazy
//! priority fetch) are never consulted.
//!
//! | # | Criterion | Worse side |
//! |---|-----------|------------|
//! | 1 | direction | penalized direction |
//! | 2 | usefulness | not useful |
//! | 3 | staleness | earlier `last_helpful` |
//! | 4 | handshake age | later `completed_handshake` |
//! | 5 | priority | lower priority; a failed fetch on either side ties |
//! | 6 | identity | lower `ConnectionId` |

use std::cmp::Ordering;

use tracing::error;

use super::errors::EvictionError;
use super::snapshot::AttributeSnapshot;
use super::value_objects::DirectionPenalty;
use crate::ports::PeerConnection;

/// Result of one criterion applied to `(left, right)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Left is definitively worse
    Worse,
    /// Left is definitively not worse
    NotWorse,
    /// This criterion cannot tell them apart
    Equivalent,
}

impl Verdict {
    /// `Less` means the left side is worse.
    fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Worse,
            Ordering::Greater => Self::NotWorse,
            Ordering::Equal => Self::Equivalent,
        }
    }
}

/// Signature shared by every criterion.
pub type CriterionFn = fn(&AttributeSnapshot<'_>, &AttributeSnapshot<'_>) -> Verdict;

/// A named step of the chain.
#[derive(Debug, Clone, Copy)]
pub struct Criterion {
    pub name: &'static str,
    pub decide: CriterionFn,
}

/// The criteria, in evaluation order.
pub const CRITERIA: [Criterion; 6] = [
    Criterion {
        name: "direction",
        decide: by_direction,
    },
    Criterion {
        name: "usefulness",
        decide: by_usefulness,
    },
    Criterion {
        name: "staleness",
        decide: by_staleness,
    },
    Criterion {
        name: "handshake_age",
        decide: by_handshake_age,
    },
    Criterion {
        name: "priority",
        decide: by_priority,
    },
    Criterion {
        name: "identity",
        decide: by_identity,
    },
];

/// A penalized direction is worse. Inverted operand order: `true` must rank first.
pub fn by_direction(l: &AttributeSnapshot<'_>, r: &AttributeSnapshot<'_>) -> Verdict {
    Verdict::from_ordering(r.bad_direction.cmp(&l.bad_direction))
}

/// Not useful is worse.
pub fn by_usefulness(l: &AttributeSnapshot<'_>, r: &AttributeSnapshot<'_>) -> Verdict {
    Verdict::from_ordering(l.useful.cmp(&r.useful))
}

/// Helped us longer ago is worse.
pub fn by_staleness(l: &AttributeSnapshot<'_>, r: &AttributeSnapshot<'_>) -> Verdict {
    Verdict::from_ordering(l.last_helpful.signed_millis_since(r.last_helpful).cmp(&0))
}

/// More recent handshake is worse: older connections have proven themselves.
pub fn by_handshake_age(l: &AttributeSnapshot<'_>, r: &AttributeSnapshot<'_>) -> Verdict {
    Verdict::from_ordering(
        r.completed_handshake
            .signed_millis_since(l.completed_handshake)
            .cmp(&0),
    )
}

/// Lower priority is worse. Resolves left first; if it fails, right is
/// never fetched.
pub fn by_priority(l: &AttributeSnapshot<'_>, r: &AttributeSnapshot<'_>) -> Verdict {
    let Ok(left) = l.priority.resolve() else {
        return Verdict::Equivalent;
    };
    let Ok(right) = r.priority.resolve() else {
        return Verdict::Equivalent;
    };
    Verdict::from_ordering(left.cmp(right))
}

/// Arbitrary but total order over identities.
pub fn by_identity(l: &AttributeSnapshot<'_>, r: &AttributeSnapshot<'_>) -> Verdict {
    Verdict::from_ordering(l.identity.cmp(&r.identity))
}

/// Whether `l` ranks strictly worse than `r`.
///
/// # Errors
///
/// `EvictionError::Indistinguishable` if every criterion ties, which means
/// both snapshots describe the same connection.
pub fn try_is_worse(
    l: &AttributeSnapshot<'_>,
    r: &AttributeSnapshot<'_>,
) -> Result<bool, EvictionError> {
    for criterion in &CRITERIA {
        match (criterion.decide)(l, r) {
            Verdict::Worse => return Ok(true),
            Verdict::NotWorse => return Ok(false),
            Verdict::Equivalent => {}
        }
    }
    Err(EvictionError::Indistinguishable {
        left: l.identity,
        right: r.identity,
    })
}

/// Whether `l` ranks strictly worse than `r`.
///
/// # Panics
///
/// If the pair cannot be ordered at all (same connection on both sides).
/// Heap order would silently corrupt otherwise.
pub fn is_worse(l: &AttributeSnapshot<'_>, r: &AttributeSnapshot<'_>) -> bool {
    match try_is_worse(l, r) {
        Ok(worse) => worse,
        Err(err) => {
            error!(left = %l.identity, right = %r.identity, "Eviction comparator found no order");
            panic!("{err}: {l:?} vs {r:?}");
        }
    }
}

/// Pairwise decision straight from two live connections, with no direction
/// penalty. Takes fresh snapshots, so each call may fetch both priorities.
pub fn worse_conn<C>(l: &C, r: &C) -> bool
where
    C: PeerConnection + Sync + ?Sized,
{
    let l = AttributeSnapshot::capture(l, DirectionPenalty::none());
    let r = AttributeSnapshot::capture(r, DirectionPenalty::none());
    is_worse(&l, &r)
}
