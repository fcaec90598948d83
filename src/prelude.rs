//! Prelude module for common imports.
//!
//! ```ignore
//! use stable_list_diff::prelude::*;
//! ```

// Identity
pub use crate::id::{HasSortKey, HasStableId};

// Algorithms
pub use crate::algo::{merge, merge_with_config, try_merge, MergeConfig, MergeStats, MovePolicy};

// Transition
pub use crate::transition::{Insertion, Transition, Update};

// Consumers
pub use crate::apply::apply;
pub use crate::queue::TransitionQueue;
pub use crate::snapshot::SnapshotCell;

// Batch
pub use crate::batch::merge_batch;

#[cfg(feature = "async")]
pub use crate::stream::transitions;

// Error
pub use crate::error::{ApplyError, MergeError, Side};
