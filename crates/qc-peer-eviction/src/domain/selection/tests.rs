//! Tests for worst-first selection

use super::*;
use crate::config::EvictionConfig;
use crate::domain::criteria::{is_worse, worse_conn};
use crate::domain::{ConnectionDirection, ConnectionId, DirectionPenalty, EvictionError};
use crate::domain::{PeerPriority, PriorityError};
use crate::ports::mocks::MockConnection;

fn make_conn(direction: ConnectionDirection, useful: bool, last_helpful: u64) -> MockConnection {
    MockConnection::new(direction)
        .with_useful(useful)
        .with_last_helpful(last_helpful)
}

/// Mixed pool where every criterion gets exercised.
fn make_pool() -> Vec<MockConnection> {
    vec![
        make_conn(ConnectionDirection::Outbound, true, 5_000),
        make_conn(ConnectionDirection::Inbound, false, 4_000),
        make_conn(ConnectionDirection::Outbound, true, 1_000).with_handshake(900),
        make_conn(ConnectionDirection::Inbound, true, 5_000).with_priority(Ok(PeerPriority::new(1))),
        make_conn(ConnectionDirection::Inbound, true, 5_000).with_priority(Ok(PeerPriority::new(2))),
        make_conn(ConnectionDirection::Outbound, true, 1_000),
        make_conn(ConnectionDirection::Outbound, false, 100),
        make_conn(ConnectionDirection::Inbound, true, 5_000)
            .with_priority(Err(PriorityError::AddressUnavailable)),
        make_conn(ConnectionDirection::Outbound, true, 9_000),
    ]
}

// =============================================================================
// TEST GROUP 1: Size and Emptiness
// =============================================================================

#[test]
fn test_len_tracks_pops() {
    let pool = make_pool();
    let mut selection = WorstFirst::new(&pool, DirectionPenalty::none());

    assert_eq!(selection.len(), pool.len());
    for remaining in (0..pool.len()).rev() {
        selection.pop_worst().unwrap();
        assert_eq!(selection.len(), remaining);
    }
    assert!(selection.is_empty());
}

#[test]
fn test_pop_on_empty_is_error() {
    let pool: Vec<MockConnection> = Vec::new();
    let mut selection = WorstFirst::new(&pool, DirectionPenalty::none());

    assert!(selection.is_empty());
    assert_eq!(selection.pop_worst().unwrap_err(), EvictionError::EmptySelection);
}

#[test]
fn test_pop_after_drain_is_error() {
    let pool = vec![make_conn(ConnectionDirection::Outbound, true, 1)];
    let mut selection = WorstFirst::new(&pool, DirectionPenalty::none());

    assert!(std::ptr::eq(selection.pop_worst().unwrap(), &pool[0]));
    assert_eq!(selection.pop_worst().unwrap_err(), EvictionError::EmptySelection);
}

// =============================================================================
// TEST GROUP 2: Heap Order
// =============================================================================

#[test]
fn test_heap_invariant_after_build_and_each_pop() {
    let pool = make_pool();
    let mut selection = WorstFirst::new(&pool, DirectionPenalty::incoming());

    assert!(selection.is_heap());
    while selection.pop_worst().is_ok() {
        assert!(selection.is_heap());
    }
}

#[test]
fn test_pops_are_sorted_worst_first() {
    let pool = make_pool();
    let popped: Vec<_> = WorstFirst::new(&pool, DirectionPenalty::none()).collect();

    assert_eq!(popped.len(), pool.len());
    for pair in popped.windows(2) {
        assert!(worse_conn(pair[0], pair[1]));
    }
}

#[test]
fn test_unhelpful_popped_before_useful() {
    let pool = make_pool();
    let mut selection = WorstFirst::new(&pool, DirectionPenalty::none());

    // Two unhelpful peers: the staler one first.
    assert!(std::ptr::eq(selection.pop_worst().unwrap(), &pool[6]));
    assert!(std::ptr::eq(selection.pop_worst().unwrap(), &pool[1]));
    assert!(selection.all(|conn| conn.useful));
}

#[test]
fn test_direction_penalty_pops_penalized_first() {
    let pool = make_pool();
    let inbound = pool
        .iter()
        .filter(|c| c.direction == ConnectionDirection::Inbound)
        .count();

    let mut selection = WorstFirst::new(&pool, DirectionPenalty::incoming());
    for _ in 0..inbound {
        let conn = selection.pop_worst().unwrap();
        assert_eq!(conn.direction, ConnectionDirection::Inbound);
    }
    assert!(selection.all(|conn| conn.direction == ConnectionDirection::Outbound));
}

#[test]
fn test_snapshots_stay_with_handles() {
    let pool = make_pool();
    let mut selection = WorstFirst::new(&pool, DirectionPenalty::outgoing());

    loop {
        for (handle, key) in selection.handles().iter().zip(selection.snapshots()) {
            assert_eq!(key.identity, ConnectionId::of(*handle));
            assert_eq!(key.useful, handle.useful);
            assert_eq!(key.last_helpful, handle.last_helpful);
        }
        if selection.pop_worst().is_err() {
            break;
        }
    }
}

// =============================================================================
// TEST GROUP 3: Lazy Priority Inside a Round
// =============================================================================

#[test]
fn test_priority_fetched_at_most_once_per_round() {
    let pool = make_pool();
    let drained: Vec<_> = WorstFirst::new(&pool, DirectionPenalty::none()).collect();

    assert_eq!(drained.len(), pool.len());
    for conn in &pool {
        assert!(conn.priority_calls() <= 1);
    }
}

#[test]
fn test_priority_skipped_when_earlier_criteria_decide() {
    // Distinct staleness everywhere: priority never needed.
    let pool: Vec<_> = (1..=6)
        .map(|i| make_conn(ConnectionDirection::Outbound, true, i * 1_000))
        .collect();
    let drained: Vec<_> = WorstFirst::new(&pool, DirectionPenalty::none()).collect();

    assert!(std::ptr::eq(drained[0], &pool[0]));
    assert!(pool.iter().all(|c| c.priority_calls() == 0));
}

#[test]
fn test_new_round_fetches_again() {
    let pool = vec![
        make_conn(ConnectionDirection::Outbound, true, 1_000),
        make_conn(ConnectionDirection::Outbound, true, 1_000),
    ];

    WorstFirst::new(&pool, DirectionPenalty::none()).for_each(drop);
    WorstFirst::new(&pool, DirectionPenalty::none()).for_each(drop);

    assert!(pool.iter().all(|c| c.priority_calls() == 2));
}

// =============================================================================
// TEST GROUP 4: Round Helpers
// =============================================================================

#[test]
fn test_pop_until_target() {
    let pool = make_pool();
    let mut selection = WorstFirst::new(&pool, DirectionPenalty::none());

    let evicted = selection.pop_until(5);

    assert_eq!(evicted.len(), pool.len() - 5);
    assert_eq!(selection.len(), 5);
    for pair in evicted.windows(2) {
        assert!(worse_conn(pair[0], pair[1]));
    }
    // Everything evicted is worse than everything kept.
    let kept: Vec<_> = selection.collect();
    for gone in &evicted {
        for stay in &kept {
            assert!(worse_conn(*gone, *stay));
        }
    }
}

#[test]
fn test_pop_until_above_len_is_noop() {
    let pool = make_pool();
    let mut selection = WorstFirst::new(&pool, DirectionPenalty::none());

    assert!(selection.pop_until(pool.len() + 3).is_empty());
    assert_eq!(selection.len(), pool.len());
}

#[test]
fn test_exact_size_iterator() {
    let pool = make_pool();
    let mut selection = WorstFirst::new(&pool, DirectionPenalty::none());

    assert_eq!(selection.size_hint(), (pool.len(), Some(pool.len())));
    selection.next();
    assert_eq!(ExactSizeIterator::len(&selection), pool.len() - 1);
}

#[test]
fn test_from_config_applies_penalty() {
    let pool = vec![
        make_conn(ConnectionDirection::Outbound, false, 1),
        make_conn(ConnectionDirection::Inbound, true, 9_000),
    ];
    let config = EvictionConfig {
        penalty: DirectionPenalty::incoming(),
    };

    let mut selection = WorstFirst::from_config(&pool, &config);
    assert!(std::ptr::eq(selection.pop_worst().unwrap(), &pool[1]));
}

#[test]
fn test_root_matches_pairwise_minimum() {
    let pool = make_pool();
    let selection = WorstFirst::new(&pool, DirectionPenalty::outgoing());
    let keys = selection.snapshots();

    for other in &keys[1..] {
        assert!(is_worse(&keys[0], other));
    }
}
