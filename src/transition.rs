//! Transition: the output of a list merge.
//!
//! A transition describes how to turn the previous snapshot into the next
//! one with index-level operations a grid or list view can animate:
//!
//! ```text
//! merge(from, to) -> Transition<&Entry>     // pure data, no views
//!       |
//!       v
//! transition.map(|e| make_item(e))          // rendering layer
//!       |
//!       v
//! grid transaction (deletions, insertions, updates)
//! ```
//!
//! # Index conventions
//!
//! - `deletions` index the **previous** snapshot and are all computed against
//!   its original positions. They are emitted highest first, so removing them
//!   one by one never shifts a pending index.
//! - `Insertion::index` and `Update::index` index the **next** snapshot.
//! - `previous_index` always indexes the previous snapshot.

use crate::algo::MergeStats;

// =============================================================================
// Operations
// =============================================================================

/// Item placed at `index` of the next snapshot.
///
/// `previous_index` is set when the item already existed at another
/// position (a move) and absent for a brand-new item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion<T> {
    pub index: usize,
    pub item: T,
    pub previous_index: Option<usize>,
}

impl<T> Insertion<T> {
    /// Whether this insertion relocates an existing item.
    #[inline]
    pub fn is_move(&self) -> bool {
        self.previous_index.is_some()
    }
}

/// Item whose content changed, now at `index` of the next snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update<T> {
    pub index: usize,
    pub item: T,
    pub previous_index: usize,
}

impl<T> Update<T> {
    /// Whether the updated item also changed position index.
    #[inline]
    pub fn is_relocated(&self) -> bool {
        self.index != self.previous_index
    }
}

// =============================================================================
// Transition
// =============================================================================

/// Deletions, insertions and updates between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Transition<T> {
    /// Indices into the previous snapshot, highest first
    pub deletions: Vec<usize>,
    /// New and moved items, ascending by index
    pub insertions: Vec<Insertion<T>>,
    /// Changed items, ascending by index
    pub updates: Vec<Update<T>>,
    /// First transition of a collection (consumer loads synchronously)
    pub initial: bool,
    /// Counts gathered while merging
    pub stats: MergeStats,
}

impl<T> Default for Transition<T> {
    fn default() -> Self {
        Self {
            deletions: Vec::new(),
            insertions: Vec::new(),
            updates: Vec::new(),
            initial: false,
            stats: MergeStats::default(),
        }
    }
}

impl<T> Transition<T> {
    /// Check if the transition changes nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty() && self.insertions.is_empty() && self.updates.is_empty()
    }

    /// Total number of operations.
    #[inline]
    pub fn len(&self) -> usize {
        self.deletions.len() + self.insertions.len() + self.updates.len()
    }

    /// Set the `initial` flag.
    #[inline]
    pub fn with_initial(mut self, initial: bool) -> Self {
        self.initial = initial;
        self
    }

    /// Convert every carried item, keeping indices and flags.
    pub fn map<U, F>(self, mut f: F) -> Transition<U>
    where
        F: FnMut(T) -> U,
    {
        Transition {
            deletions: self.deletions,
            insertions: self
                .insertions
                .into_iter()
                .map(|ins| Insertion {
                    index: ins.index,
                    item: f(ins.item),
                    previous_index: ins.previous_index,
                })
                .collect(),
            updates: self
                .updates
                .into_iter()
                .map(|upd| Update {
                    index: upd.index,
                    item: f(upd.item),
                    previous_index: upd.previous_index,
                })
                .collect(),
            initial: self.initial,
            stats: self.stats,
        }
    }

    /// Iterate over insertions that move an existing item.
    pub fn moves(&self) -> impl Iterator<Item = &Insertion<T>> {
        self.insertions.iter().filter(|ins| ins.is_move())
    }
}

impl<T: Clone> Transition<&T> {
    /// Clone borrowed items into an owned transition.
    pub fn cloned(self) -> Transition<T> {
        self.map(Clone::clone)
    }
}

// =============================================================================
// Tests
// =============================================================================
