//! Error types for stable-list-diff.
//!
//! `merge` itself is total. Errors only come from the checked entry point
//! (`try_merge`) and from applying a transition to a collection.

use std::fmt;

use thiserror::Error;

/// Which snapshot of a diff an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The previous snapshot.
    From,
    /// The next snapshot.
    To,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => f.write_str("from"),
            Self::To => f.write_str("to"),
        }
    }
}

// =============================================================================
// MergeError
// =============================================================================

/// Precondition violations detected by `try_merge`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// Two entries of one snapshot share a stable id
    #[error("duplicate stable id in `{side}` snapshot at index {index} (first seen at {first})")]
    DuplicateId {
        /// Snapshot containing the duplicate
        side: Side,
        /// Index of the first occurrence
        first: usize,
        /// Index of the repeated occurrence
        index: usize,
    },

    /// A snapshot is not strictly ascending by sort key
    #[error("`{side}` snapshot is not ordered by sort key at index {index}")]
    Unordered {
        /// Snapshot that is out of order
        side: Side,
        /// Index of the first entry not greater than its predecessor
        index: usize,
    },
}

/// Result type alias for checked merges.
pub type MergeResult<T> = Result<T, MergeError>;

// =============================================================================
// ApplyError
// =============================================================================

/// A transition that cannot be applied to a collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// Deletion points past the end of the collection
    #[error("deletion index {index} out of bounds (len {len})")]
    DeletionOutOfBounds {
        /// Offending index
        index: usize,
        /// Collection length
        len: usize,
    },

    /// Same index deleted twice
    #[error("index {index} deleted twice")]
    DuplicateDeletion {
        /// Offending index
        index: usize,
    },

    /// Previous index points past the end of the collection
    #[error("previous index {index} out of bounds (len {len})")]
    PreviousIndexOutOfBounds {
        /// Offending index
        index: usize,
        /// Collection length
        len: usize,
    },

    /// Previous index refers to an entry that is also deleted
    #[error("previous index {index} is also deleted")]
    PreviousIndexDeleted {
        /// Offending index
        index: usize,
    },

    /// Two operations claim the same previous entry
    #[error("previous index {index} claimed twice")]
    PreviousIndexClaimedTwice {
        /// Offending index
        index: usize,
    },

    /// Insertion or update targets a slot past the end of the result
    #[error("target index {index} out of bounds (result len {len})")]
    TargetOutOfBounds {
        /// Offending index
        index: usize,
        /// Length of the resulting collection
        len: usize,
    },

    /// Two operations target the same slot
    #[error("target index {index} written twice")]
    TargetConflict {
        /// Offending index
        index: usize,
    },

    /// Carried-over entries do not fill the free slots exactly
    #[error("carried entries mismatch: {free} free slots, {carried} carried entries")]
    CarriedMismatch {
        /// Slots not written by insertions or updates
        free: usize,
        /// Entries carried over unchanged
        carried: usize,
    },
}

/// Result type alias for applying transitions.
pub type ApplyResult<T> = Result<T, ApplyError>;
