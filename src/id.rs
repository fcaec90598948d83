//! Identity and ordering traits for diffable entries.
//!
//! An entry takes part in a diff through three relations:
//! - **Identity** (`HasStableId`): which entries in two snapshots are the same
//!   logical item
//! - **Content** (`PartialEq`): whether a matched item changed and needs an
//!   in-place update
//! - **Order** (`HasSortKey`): the monotonic position key snapshots are
//!   sorted by
//!
//! # Why a separate sort key?
//!
//! Two versions of one item share an index but differ in content. An `Ord`
//! impl on the entry itself would have to report them as `Equal` while
//! `PartialEq` reports them as different, which breaks the `Ord` contract.
//! Keeping the order on a separate key avoids that.
//!
//! ```
//! use stable_list_diff::{HasSortKey, HasStableId};
//!
//! #[derive(Clone, PartialEq)]
//! struct PackEntry {
//!     index: usize,
//!     pack_id: i64,
//!     installed: bool,
//! }
//!
//! impl HasStableId for PackEntry {
//!     type Id = i64;
//!     fn stable_id(&self) -> i64 {
//!         self.pack_id
//!     }
//! }
//!
//! impl HasSortKey for PackEntry {
//!     type Key = usize;
//!     fn sort_key(&self) -> usize {
//!         self.index
//!     }
//! }
//! ```

use std::hash::Hash;

// =============================================================================
// HasStableId
// =============================================================================

/// Entries that carry an identity stable across snapshots.
///
/// Ids must be unique within one snapshot. `merge` does not check this;
/// use `try_merge` when the input is not trusted.
pub trait HasStableId {
    /// Identity key type.
    type Id: Hash + Eq;

    /// Identity of this entry.
    fn stable_id(&self) -> Self::Id;
}

impl<T: HasStableId + ?Sized> HasStableId for &T {
    type Id = T::Id;

    #[inline]
    fn stable_id(&self) -> Self::Id {
        (**self).stable_id()
    }
}

// =============================================================================
// HasSortKey
// =============================================================================

/// Entries that carry the monotonic key their snapshot is ordered by.
pub trait HasSortKey {
    /// Ordering key type.
    type Key: Ord;

    /// Ordering key of this entry.
    fn sort_key(&self) -> Self::Key;
}

impl<T: HasSortKey + ?Sized> HasSortKey for &T {
    type Key = T::Key;

    #[inline]
    fn sort_key(&self) -> Self::Key {
        (**self).sort_key()
    }
}
