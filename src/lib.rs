//! stable-list-diff - Identity-preserving list merge for incremental views
//!
//! ## Core Concepts
//!
//! **Snapshots**: every state recomputation (new search results, a changed
//! featured list) produces a fresh ordered snapshot of entries. Entries carry
//! a stable id, content equality, and a monotonic sort key.
//!
//! **Transitions**: merging two snapshots yields deletions, insertions (with
//! a previous index for moves) and updates, which a grid or list view
//! applies without a full reload.
//!
//! ## Modules
//! - `id`: `HasStableId` / `HasSortKey` traits
//! - `algo`: the merge itself
//! - `transition`: `Transition`, `Insertion`, `Update`
//! - `apply`: reference consumer over a `Vec`
//! - `snapshot`: shared swap-and-diff cell
//! - `queue`: transitions deferred until the consumer is ready
//! - `batch`: many merges at once (parallel with `parallel`)
//! - `stream`: snapshot stream -> transition stream (`async`)
//!
//! ## Usage
//!
//! ```
//! use stable_list_diff::{apply, HasStableId, SnapshotCell, TransitionQueue};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Pack {
//!     id: i64,
//!     installed: bool,
//! }
//!
//! impl HasStableId for Pack {
//!     type Id = i64;
//!     fn stable_id(&self) -> i64 {
//!         self.id
//!     }
//! }
//!
//! // Producer side (any thread)
//! let cell = SnapshotCell::new();
//! let first = cell.advance(vec![Pack { id: 1, installed: false }]);
//! let second = cell.advance(vec![
//!     Pack { id: 1, installed: true },
//!     Pack { id: 2, installed: false },
//! ]);
//!
//! // Consumer side (UI context)
//! let mut queue = TransitionQueue::new();
//! queue.enqueue(first);
//! queue.enqueue(second);
//! queue.set_ready(true);
//!
//! let mut shown = Vec::new();
//! for transition in queue.drain() {
//!     apply(&mut shown, &transition).unwrap();
//! }
//! assert_eq!(shown.len(), 2);
//! assert!(shown[0].installed);
//! ```

/// Identity and ordering traits
pub mod id;

/// Algorithms: merge, kept-subsequence detection
pub mod algo;

/// Transition types
pub mod transition;

/// Applying transitions to collections
pub mod apply;

/// Shared latest-snapshot cell
pub mod snapshot;

/// Deferred transition queue
pub mod queue;

/// Batch merging
pub mod batch;

/// Snapshot streams
#[cfg(feature = "async")]
pub mod stream;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Identity
pub use id::{HasSortKey, HasStableId};

// Algorithms
pub use algo::{
    check_snapshot, merge, merge_with_config, try_merge, MergeConfig, MergeStats, MovePolicy,
};

// Transition
pub use transition::{Insertion, Transition, Update};

// Consumers
pub use apply::{applied, apply};
pub use queue::TransitionQueue;
pub use snapshot::SnapshotCell;

// Batch
pub use batch::{merge_batch, SnapshotPair};

#[cfg(feature = "async")]
pub use stream::transitions;

// Error types
pub use error::{ApplyError, ApplyResult, MergeError, MergeResult, Side};

// =============================================================================
// Tests
// =============================================================================
