//! Applying a transition to an in-memory collection.
//!
//! This is the reference consumer of a `Transition`: it follows the same
//! rules a grid view follows when it runs a transaction.
//!
//! 1. Deletions and previous indices refer to the collection **before** the
//!    transition
//! 2. Insertions and updates are written at their index in the result
//! 3. Every entry neither deleted nor claimed by a `previous_index` is
//!    carried over, in its original order, into the remaining slots
//!
//! The collection is only replaced when the whole transition is valid.

use crate::error::{ApplyError, ApplyResult};
use crate::transition::Transition;

/// Apply `transition` to `current` in place.
///
/// # Errors
///
/// Returns an `ApplyError` and leaves `current` untouched when the transition
/// does not fit the collection (out-of-range or conflicting indices, or a
/// carried-over count that does not fill the free slots).
pub fn apply<T: Clone>(current: &mut Vec<T>, transition: &Transition<T>) -> ApplyResult<()> {
    let next = applied(current, transition).inspect_err(|err| {
        tracing::warn!(len = current.len(), error = %err, "rejected transition");
    })?;
    *current = next;
    Ok(())
}

/// Compute the collection that results from applying `transition`.
pub fn applied<T: Clone>(current: &[T], transition: &Transition<T>) -> ApplyResult<Vec<T>> {
    let len = current.len();

    // Slots of `current` that do not carry over
    let mut deleted = vec![false; len];
    let mut claimed = vec![false; len];

    for &index in &transition.deletions {
        if index >= len {
            return Err(ApplyError::DeletionOutOfBounds { index, len });
        }
        if deleted[index] {
            return Err(ApplyError::DuplicateDeletion { index });
        }
        deleted[index] = true;
    }

    let previous = transition
        .insertions
        .iter()
        .filter_map(|ins| ins.previous_index)
        .chain(transition.updates.iter().map(|upd| upd.previous_index));

    for index in previous {
        if index >= len {
            return Err(ApplyError::PreviousIndexOutOfBounds { index, len });
        }
        if deleted[index] {
            return Err(ApplyError::PreviousIndexDeleted { index });
        }
        if claimed[index] {
            return Err(ApplyError::PreviousIndexClaimedTwice { index });
        }
        claimed[index] = true;
    }

    let fresh = transition.insertions.iter().filter(|ins| !ins.is_move()).count();
    let result_len = len - transition.deletions.len() + fresh;

    let mut slots: Vec<Option<T>> = vec![None; result_len];

    let written = transition
        .insertions
        .iter()
        .map(|ins| (ins.index, &ins.item))
        .chain(transition.updates.iter().map(|upd| (upd.index, &upd.item)));

    for (index, item) in written {
        let slot = slots
            .get_mut(index)
            .ok_or(ApplyError::TargetOutOfBounds { index, len: result_len })?;
        if slot.is_some() {
            return Err(ApplyError::TargetConflict { index });
        }
        *slot = Some(item.clone());
    }

    let free = slots.iter().filter(|slot| slot.is_none()).count();
    let carried = (0..len).filter(|&i| !deleted[i] && !claimed[i]).count();
    if free != carried {
        return Err(ApplyError::CarriedMismatch { free, carried });
    }

    let mut carry = current
        .iter()
        .enumerate()
        .filter(|&(i, _)| !deleted[i] && !claimed[i])
        .map(|(_, item)| item.clone());

    Ok(slots
        .into_iter()
        .filter_map(|slot| slot.or_else(|| carry.next()))
        .collect())
}

// =============================================================================
// Tests
// =============================================================================
