//! Run-once cache around the external priority computation.

use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::domain::{PeerPriority, PriorityError};

/// Outcome of one priority fetch.
pub type PriorityResult = Result<PeerPriority, PriorityError>;

type Fetch<'a> = Box<dyn Fn() -> PriorityResult + Send + Sync + 'a>;

/// Lazily resolved peer priority.
///
/// The fetch callback runs on the first [`resolve`](Self::resolve) and never
/// again, whether it succeeded or failed. Racing first callers block on the
/// `OnceLock` until the single fetch finishes and then share its result.
pub struct LazyPriority<'a> {
    fetch: Fetch<'a>,
    cached: OnceLock<PriorityResult>,
}

impl<'a> LazyPriority<'a> {
    /// Wrap a fetch callback. Nothing runs until the first `resolve`.
    pub fn new<F>(fetch: F) -> Self
    where
        F: Fn() -> PriorityResult + Send + Sync + 'a,
    {
        Self {
            fetch: Box::new(fetch),
            cached: OnceLock::new(),
        }
    }

    /// Return the cached result, fetching it on first use.
    pub fn resolve(&self) -> &PriorityResult {
        self.cached.get_or_init(|| {
            let result = (self.fetch)();
            if let Err(err) = &result {
                debug!(error = %err, "Peer priority unavailable, treating as neutral");
            }
            result
        })
    }

    /// Whether the fetch has already run.
    pub fn is_resolved(&self) -> bool {
        self.cached.get().is_some()
    }

    /// The cached result, without triggering a fetch.
    pub fn peek(&self) -> Option<&PriorityResult> {
        self.cached.get()
    }
}

impl fmt::Debug for LazyPriority<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cached.get() {
            Some(result) => f.debug_tuple("LazyPriority").field(result).finish(),
            None => f.write_str("LazyPriority(<unresolved>)"),
        }
    }
}
