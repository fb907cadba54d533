//! Domain Layer - Pure ranking logic with no I/O
//!
//! - Attribute snapshots with a run-once priority cache
//! - Worse-than comparator (ordered criteria chain)
//! - Worst-first selection heap

pub mod criteria;
pub mod entities;
pub mod errors;
pub mod selection;
pub mod snapshot;
pub mod value_objects;

pub use criteria::{is_worse, try_is_worse, worse_conn, Criterion, CriterionFn, Verdict, CRITERIA};
pub use entities::*;
pub use errors::*;
pub use selection::WorstFirst;
pub use snapshot::{AttributeSnapshot, LazyPriority, PriorityResult};
pub use value_objects::*;
