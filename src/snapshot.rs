//! Shared "current snapshot" cell.
//!
//! Producers (search results, featured lists) publish a fresh snapshot on
//! every state recomputation. The cell swaps it in and diffs it against the
//! one it replaced, so each caller gets the transition from whatever was
//! current before it.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::algo::{merge_with_config, MergeConfig};
use crate::id::HasStableId;
use crate::transition::Transition;

/// Thread-safe holder of the latest snapshot.
///
/// Uses `parking_lot::Mutex`; the lock is held only for the swap, the diff
/// itself runs outside it.
#[derive(Debug)]
pub struct SnapshotCell<E> {
    current: Mutex<Option<Arc<[E]>>>,
    config: MergeConfig,
}

impl<E> Default for SnapshotCell<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> SnapshotCell<E> {
    /// Create an empty cell with the default merge config.
    pub fn new() -> Self {
        Self::with_config(MergeConfig::default())
    }

    /// Create an empty cell with a custom merge config.
    pub fn with_config(config: MergeConfig) -> Self {
        Self {
            current: Mutex::new(None),
            config,
        }
    }

    /// Merge config used by `advance`.
    pub fn config(&self) -> MergeConfig {
        self.config
    }

    /// Latest snapshot, if any.
    pub fn current(&self) -> Option<Arc<[E]>> {
        self.current.lock().clone()
    }

    /// Drop the stored snapshot and return it.
    ///
    /// The next `advance` produces an initial transition.
    pub fn reset(&self) -> Option<Arc<[E]>> {
        self.current.lock().take()
    }
}

impl<E> SnapshotCell<E>
where
    E: HasStableId + PartialEq + Clone,
{
    /// Store `next` and return the transition from the previous snapshot.
    ///
    /// With no previous snapshot the transition inserts everything and is
    /// marked `initial`.
    pub fn advance(&self, next: Vec<E>) -> Transition<E> {
        let next: Arc<[E]> = next.into();
        let previous = self.current.lock().replace(Arc::clone(&next));
        let initial = previous.is_none();

        let from: &[E] = previous.as_deref().unwrap_or(&[]);
        let transition = merge_with_config(from, &next, self.config).cloned().with_initial(initial);

        tracing::debug!(initial, len = next.len(), ops = transition.len(), "advanced snapshot");
        transition
    }
}
