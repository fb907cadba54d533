//! # Worst-First Selection
//!
//! Per-round priority queue of eviction candidates.
//!
//! ## Usage
//!
//! 1. Snapshot all current connections under the round's direction penalty
//! 2. Heapify once, worst at the root
//! 3. Pop until the connection budget is met
//!
//! The structure is rebuilt every round so snapshots never go stale; it has
//! no insertion.

mod heap;

pub use heap::WorstFirst;

#[cfg(test)]
mod tests;
