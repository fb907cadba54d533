//! Worst-first binary heap over connection handles.

use std::fmt;

use tracing::{debug, trace};

use crate::config::EvictionConfig;
use crate::domain::criteria::is_worse;
use crate::domain::errors::EvictionError;
use crate::domain::snapshot::AttributeSnapshot;
use crate::domain::value_objects::DirectionPenalty;
use crate::ports::PeerConnection;

/// Connections of one eviction round, ordered so the root is always the
/// current worst.
///
/// Built once and drained; there is no insertion. `conns[i]` and `keys[i]`
/// always describe the same connection.
pub struct WorstFirst<'a, C: ?Sized> {
    /// Borrowed connection handles
    conns: Vec<&'a C>,
    /// Snapshot for each handle, same index
    keys: Vec<AttributeSnapshot<'a>>,
}

impl<'a, C> WorstFirst<'a, C>
where
    C: PeerConnection + Sync + ?Sized,
{
    /// Snapshot every connection under `penalty` and heapify.
    pub fn new<I>(conns: I, penalty: DirectionPenalty) -> Self
    where
        I: IntoIterator<Item = &'a C>,
    {
        let conns: Vec<&'a C> = conns.into_iter().collect();
        let keys = conns
            .iter()
            .map(|conn| AttributeSnapshot::capture(*conn, penalty))
            .collect();

        let mut selection = Self { conns, keys };
        selection.heapify();

        debug!(
            connections = selection.len(),
            incoming_is_bad = penalty.incoming_is_bad,
            outgoing_is_bad = penalty.outgoing_is_bad,
            "Built worst-first eviction selection"
        );
        selection
    }

    /// Same as [`new`](Self::new) with the penalty taken from `config`.
    pub fn from_config<I>(conns: I, config: &EvictionConfig) -> Self
    where
        I: IntoIterator<Item = &'a C>,
    {
        Self::new(conns, config.penalty)
    }

    /// Number of connections still held.
    pub fn len(&self) -> usize {
        self.conns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conns.is_empty()
    }

    /// Remove and return the worst remaining connection.
    ///
    /// # Errors
    ///
    /// `EvictionError::EmptySelection` once every connection has been popped.
    pub fn pop_worst(&mut self) -> Result<&'a C, EvictionError> {
        let n = self.len();
        if n == 0 {
            return Err(EvictionError::EmptySelection);
        }

        let last = n - 1;
        self.swap(0, last);
        self.sift_down(0, last);

        match (self.conns.pop(), self.keys.pop()) {
            (Some(conn), Some(key)) => {
                trace!(
                    connection = %key.identity,
                    remaining = self.len(),
                    "Popped worst connection"
                );
                Ok(conn)
            }
            _ => Err(EvictionError::EmptySelection),
        }
    }

    /// Pop until at most `target_len` connections remain.
    ///
    /// Returns the popped handles, worst first. The caller decides the target.
    pub fn pop_until(&mut self, target_len: usize) -> Vec<&'a C> {
        let mut evicted = Vec::with_capacity(self.len().saturating_sub(target_len));
        while self.len() > target_len {
            match self.pop_worst() {
                Ok(conn) => evicted.push(conn),
                Err(_) => break,
            }
        }
        evicted
    }

    fn less(&self, i: usize, j: usize) -> bool {
        is_worse(&self.keys[i], &self.keys[j])
    }

    /// Handles and snapshots move together.
    fn swap(&mut self, i: usize, j: usize) {
        self.conns.swap(i, j);
        self.keys.swap(i, j);
    }

    fn heapify(&mut self) {
        let n = self.len();
        for i in (0..n / 2).rev() {
            self.sift_down(i, n);
        }
    }

    /// Restore heap order below `i`, considering only the first `n` entries.
    fn sift_down(&mut self, mut i: usize, n: usize) {
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let child = if right < n && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, i) {
                break;
            }
            self.swap(i, child);
            i = child;
        }
    }

    #[cfg(test)]
    pub(crate) fn is_heap(&self) -> bool {
        (1..self.len()).all(|i| !self.less(i, (i - 1) / 2))
    }

    #[cfg(test)]
    pub(crate) fn snapshots(&self) -> &[AttributeSnapshot<'a>] {
        &self.keys
    }

    #[cfg(test)]
    pub(crate) fn handles(&self) -> &[&'a C] {
        &self.conns
    }
}

/// Draining iteration, worst first.
impl<'a, C> Iterator for WorstFirst<'a, C>
where
    C: PeerConnection + Sync + ?Sized,
{
    type Item = &'a C;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop_worst().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, C> ExactSizeIterator for WorstFirst<'a, C> where C: PeerConnection + Sync + ?Sized {}

impl<C: ?Sized> fmt::Debug for WorstFirst<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorstFirst")
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}
