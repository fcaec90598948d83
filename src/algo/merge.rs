//! Stable list merge with updates.
//!
//! Computes the transition between two snapshots of identity-bearing
//! entries. This is a **pure algorithm module**: it borrows both snapshots,
//! never mutates them, and knows nothing about views.
//!
//! # Algorithm
//!
//! 1. Map every stable id of `from` to its position
//! 2. Look up each entry of `to` by id
//! 3. Among matched entries, find the largest set whose relative order is
//!    unchanged (see `lis`); those are kept in place
//! 4. Classify:
//!    - unmatched in `to` -> insertion without previous index
//!    - matched, content differs -> update (position may change)
//!    - matched, equal, not kept -> move, per `MovePolicy`
//!    - matched, equal, kept -> nothing
//!    - unmatched in `from` -> deletion
//!
//! # Why relative order?
//!
//! Inserting one entry at the head of a list shifts every index after it.
//! Comparing raw indices would report all of them as moved; comparing
//! relative order reports a single insertion.
//!
//! # Complexity
//!
//! - Time: O(n + m) hash lookups, plus O(k log k) only when matched entries
//!   were reordered
//! - Space: O(n + m)

use rustc_hash::FxHashMap;

use crate::error::{MergeError, MergeResult, Side};
use crate::id::{HasSortKey, HasStableId};
use crate::transition::{Insertion, Transition, Update};

use super::lis::kept_in_place;

// =============================================================================
// Configuration
// =============================================================================

/// How an entry that only changed position is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MovePolicy {
    /// Insertion with `previous_index` set
    #[default]
    Insert,
    /// Update with `previous_index` set
    Update,
}

/// Merge behavior knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeConfig {
    /// Reporting of position-only changes.
    /// Default: `MovePolicy::Insert`
    pub move_policy: MovePolicy,
    /// Report every matched entry as updated, even when equal.
    /// Use when rendered items depend on state outside the entries.
    /// Default: false
    pub all_updated: bool,
}

impl MergeConfig {
    /// Create config with explicit settings.
    pub fn new(move_policy: MovePolicy, all_updated: bool) -> Self {
        Self { move_policy, all_updated }
    }

    /// Report moves as updates.
    pub fn moves_as_updates() -> Self {
        Self { move_policy: MovePolicy::Update, ..Self::default() }
    }

    /// Report every matched entry as updated.
    pub fn all_updated() -> Self {
        Self { all_updated: true, ..Self::default() }
    }

    /// Replace the move policy.
    pub fn with_move_policy(mut self, move_policy: MovePolicy) -> Self {
        self.move_policy = move_policy;
        self
    }

    /// Replace the all-updated flag.
    pub fn with_all_updated(mut self, all_updated: bool) -> Self {
        self.all_updated = all_updated;
        self
    }
}

/// Statistics from a merge
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    /// Matched, equal, in place
    pub kept: usize,
    /// New in `to`
    pub inserted: usize,
    /// Gone from `from`
    pub deleted: usize,
    /// Matched, relative position changed (whatever the reporting policy)
    pub moved: usize,
    /// Matched, reported as update
    pub updated: usize,
}

impl MergeStats {
    pub fn edit_count(&self) -> usize {
        self.inserted + self.deleted + self.moved + self.updated
    }

    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Merge two snapshots with the default config.
///
/// Stable ids must be unique within each snapshot; the output is
/// unspecified otherwise. See `try_merge` for a checked variant.
///
/// # Example
///
/// ```
/// use stable_list_diff::{merge, HasStableId};
///
/// #[derive(Debug, PartialEq)]
/// struct Row(u32, &'static str);
///
/// impl HasStableId for Row {
///     type Id = u32;
///     fn stable_id(&self) -> u32 { self.0 }
/// }
///
/// let from = [Row(1, "a"), Row(2, "b")];
/// let to = [Row(2, "b"), Row(3, "c")];
///
/// let t = merge(&from, &to);
/// assert_eq!(t.deletions, vec![0]);
/// assert_eq!(t.insertions.len(), 1);
/// assert_eq!(t.insertions[0].index, 1);
/// ```
pub fn merge<'a, E>(from: &'a [E], to: &'a [E]) -> Transition<&'a E>
where
    E: HasStableId + PartialEq,
{
    merge_with_config(from, to, MergeConfig::default())
}

/// Merge two snapshots with a custom config.
pub fn merge_with_config<'a, E>(from: &'a [E], to: &'a [E], config: MergeConfig) -> Transition<&'a E>
where
    E: HasStableId + PartialEq,
{
    let mut transition = Transition::default();

    // Quick paths
    if from.is_empty() && to.is_empty() {
        return transition;
    }

    if from.is_empty() {
        transition.insertions = to
            .iter()
            .enumerate()
            .map(|(index, item)| Insertion { index, item, previous_index: None })
            .collect();
        transition.stats.inserted = to.len();
        log_merge(from.len(), to.len(), &transition);
        return transition;
    }

    if to.is_empty() {
        transition.deletions = (0..from.len()).rev().collect();
        transition.stats.deleted = from.len();
        log_merge(from.len(), to.len(), &transition);
        return transition;
    }

    let positions: FxHashMap<E::Id, usize> = from
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.stable_id(), i))
        .collect();

    let matches: Vec<Option<usize>> = to.iter().map(|entry| positions.get(&entry.stable_id()).copied()).collect();

    let stats = &mut transition.stats;

    let mut retained = vec![false; from.len()];
    for &previous in matches.iter().flatten() {
        retained[previous] = true;
    }

    transition.deletions = (0..from.len()).rev().filter(|&i| !retained[i]).collect();
    stats.deleted = transition.deletions.len();

    let kept = kept_in_place(&matches);

    for (index, ((item, previous), in_place)) in to.iter().zip(&matches).zip(kept).enumerate() {
        let Some(previous_index) = *previous else {
            transition.insertions.push(Insertion { index, item, previous_index: None });
            stats.inserted += 1;
            continue;
        };

        if !in_place {
            stats.moved += 1;
        }

        let changed = config.all_updated || from[previous_index] != *item;

        if changed || (!in_place && config.move_policy == MovePolicy::Update) {
            transition.updates.push(Update { index, item, previous_index });
            stats.updated += 1;
        } else if !in_place {
            transition.insertions.push(Insertion { index, item, previous_index: Some(previous_index) });
        } else {
            stats.kept += 1;
        }
    }

    log_merge(from.len(), to.len(), &transition);
    transition
}

/// Merge two snapshots after checking their preconditions.
///
/// Fails fast when a snapshot repeats a stable id or is not strictly
/// ascending by sort key.
pub fn try_merge<'a, E>(from: &'a [E], to: &'a [E], config: MergeConfig) -> MergeResult<Transition<&'a E>>
where
    E: HasStableId + HasSortKey + PartialEq,
{
    check_snapshot(from, Side::From)?;
    check_snapshot(to, Side::To)?;
    Ok(merge_with_config(from, to, config))
}

/// Check that a snapshot has unique stable ids and ascending sort keys.
pub fn check_snapshot<E>(entries: &[E], side: Side) -> MergeResult<()>
where
    E: HasStableId + HasSortKey,
{
    let mut seen: FxHashMap<E::Id, usize> = FxHashMap::default();
    seen.reserve(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if let Some(&first) = seen.get(&entry.stable_id()) {
            return Err(MergeError::DuplicateId { side, first, index });
        }
        seen.insert(entry.stable_id(), index);
    }

    if let Some(pos) = entries.windows(2).position(|w| w[0].sort_key() >= w[1].sort_key()) {
        return Err(MergeError::Unordered { side, index: pos + 1 });
    }

    Ok(())
}

fn log_merge<T>(from_len: usize, to_len: usize, transition: &Transition<T>) {
    let stats = &transition.stats;
    tracing::debug!(
        from = from_len,
        to = to_len,
        kept = stats.kept,
        inserted = stats.inserted,
        deleted = stats.deleted,
        moved = stats.moved,
        updated = stats.updated,
        "merged list snapshots"
    );
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::apply;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        id: u32,
        version: u32,
    }

    impl HasStableId for Entry {
        type Id = u32;
        fn stable_id(&self) -> u32 {
            self.id
        }
    }

    fn e(id: u32, version: u32) -> Entry {
        Entry { id, version }
    }

    fn list(ids: &[u32]) -> Vec<Entry> {
        ids.iter().map(|&id| e(id, 1)).collect()
    }

    fn assert_round_trip(from: &[Entry], to: &[Entry], config: MergeConfig) {
        let transition = merge_with_config(from, to, config).cloned();
        let mut current = from.to_vec();
        apply(&mut current, &transition).expect("transition applies");
        assert_eq!(current, to, "transition: {transition:?}");
    }

    #[test]
    fn test_scenario_a_equal_snapshots() {
        let from = vec![e(1, 1), e(2, 1)];
        let to = vec![e(1, 1), e(2, 1)];

        let t = merge(&from, &to);
        assert!(t.is_empty());
        assert_eq!(t.stats.kept, 2);
    }

    #[test]
    fn test_scenario_b_append() {
        let from = list(&[1]);
        let to = list(&[1, 2]);

        let t = merge(&from, &to);
        assert!(t.deletions.is_empty());
        assert!(t.updates.is_empty());
        assert_eq!(t.insertions, vec![Insertion { index: 1, item: &to[1], previous_index: None }]);
    }

    #[test]
    fn test_scenario_c_delete_head() {
        let from = list(&[1, 2]);
        let to = list(&[2]);

        let t = merge(&from, &to);
        assert_eq!(t.deletions, vec![0]);
        assert!(t.insertions.is_empty());
        assert!(t.updates.is_empty());
    }

    #[test]
    fn test_scenario_d_content_update() {
        let from = vec![e(1, 1)];
        let to = vec![e(1, 2)];

        let t = merge(&from, &to);
        assert!(t.deletions.is_empty());
        assert!(t.insertions.is_empty());
        assert_eq!(t.updates, vec![Update { index: 0, item: &to[0], previous_index: 0 }]);
    }

    #[test]
    fn test_scenario_e_swap_is_single_move() {
        let from = list(&[1, 2]);
        let to = list(&[2, 1]);

        let t = merge(&from, &to);
        assert!(t.deletions.is_empty());
        assert!(t.updates.is_empty());
        assert_eq!(t.insertions.len(), 1);
        assert!(t.insertions[0].is_move());
        assert_eq!(t.stats.moved, 1);
        assert_round_trip(&from, &to, MergeConfig::default());
    }

    #[test]
    fn test_swap_as_update_policy() {
        let from = list(&[1, 2]);
        let to = list(&[2, 1]);

        let t = merge_with_config(&from, &to, MergeConfig::moves_as_updates());
        assert!(t.deletions.is_empty());
        assert!(t.insertions.is_empty());
        assert_eq!(t.updates.len(), 1);
        assert!(t.updates[0].is_relocated());
        assert_round_trip(&from, &to, MergeConfig::moves_as_updates());
    }

    #[test]
    fn test_prepend_is_not_a_move() {
        let from = list(&[2, 3, 4]);
        let to = list(&[1, 2, 3, 4]);

        let t = merge(&from, &to);
        assert_eq!(t.insertions.len(), 1);
        assert_eq!(t.insertions[0].index, 0);
        assert_eq!(t.insertions[0].previous_index, None);
        assert_eq!(t.stats.moved, 0);
        assert_eq!(t.stats.kept, 3);
    }

    #[test]
    fn test_rotation_moves_single_entry() {
        let from = list(&[1, 2, 3, 4]);
        let to = list(&[4, 1, 2, 3]);

        let t = merge(&from, &to);
        assert_eq!(t.insertions, vec![Insertion { index: 0, item: &to[0], previous_index: Some(3) }]);
        assert_round_trip(&from, &to, MergeConfig::default());
    }

    #[test]
    fn test_moved_and_changed_is_single_update() {
        let from = vec![e(1, 1), e(2, 1)];
        let to = vec![e(2, 2), e(1, 1)];

        let t = merge(&from, &to);
        let ids: Vec<u32> = t
            .insertions
            .iter()
            .map(|i| i.item.id)
            .chain(t.updates.iter().map(|u| u.item.id))
            .collect();
        // each id reported once at most
        assert_eq!(ids.iter().filter(|&&id| id == 2).count(), 1);
        assert!(t.deletions.is_empty());
        assert_round_trip(&from, &to, MergeConfig::default());
    }

    #[test]
    fn test_all_updated_reports_every_match() {
        let from = list(&[1, 2, 3]);
        let to = list(&[1, 3, 4]);

        let t = merge_with_config(&from, &to, MergeConfig::all_updated());
        assert_eq!(t.deletions, vec![1]);
        assert_eq!(t.insertions.len(), 1);
        let updated: Vec<(usize, usize)> = t.updates.iter().map(|u| (u.index, u.previous_index)).collect();
        assert_eq!(updated, vec![(0, 0), (1, 2)]);
    }

    #[test]
    fn test_deletions_are_descending() {
        let from = list(&[1, 2, 3, 4, 5]);
        let to = list(&[2, 4]);

        let t = merge(&from, &to);
        assert_eq!(t.deletions, vec![4, 2, 0]);
        assert_eq!(t.stats.deleted, 3);
    }

    #[test]
    fn test_quick_paths() {
        let items = list(&[1, 2, 3]);

        let t = merge(&[], &items);
        assert_eq!(t.stats.inserted, 3);
        assert!(t.insertions.iter().all(|i| i.previous_index.is_none()));

        let t = merge(&items, &[]);
        assert_eq!(t.deletions, vec![2, 1, 0]);

        let t = merge::<Entry>(&[], &[]);
        assert!(t.is_empty());
    }

    #[test]
    fn test_identity_preservation_and_completeness() {
        let from = list(&[1, 2, 3, 4, 5, 6]);
        let mut to = list(&[6, 2, 7, 4, 1, 8]);
        to[1].version = 3;

        let t = merge(&from, &to);

        for id in [1, 2, 4, 6] {
            let from_idx = from.iter().position(|x| x.id == id).unwrap();
            assert!(!t.deletions.contains(&from_idx), "id {id} deleted");
            let ops = t.insertions.iter().filter(|i| i.item.id == id).count()
                + t.updates.iter().filter(|u| u.item.id == id).count();
            assert!(ops <= 1, "id {id} reported {ops} times");
        }

        // 3 and 5 gone
        assert_eq!(t.deletions, vec![4, 2]);
        // 7 and 8 new
        let fresh: Vec<u32> = t.insertions.iter().filter(|i| !i.is_move()).map(|i| i.item.id).collect();
        assert_eq!(fresh, vec![7, 8]);

        assert_round_trip(&from, &to, MergeConfig::default());
        assert_round_trip(&from, &to, MergeConfig::moves_as_updates());
        assert_round_trip(&from, &to, MergeConfig::all_updated());
    }

    #[test]
    fn test_idempotence() {
        let items = vec![e(3, 1), e(9, 4), e(1, 2)];
        let t = merge(&items, &items);
        assert!(t.is_empty());
        assert!(t.stats.is_empty());
    }

    #[test]
    fn test_round_trip_shuffles() {
        let cases: &[(&[u32], &[u32])] = &[
            (&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1]),
            (&[1, 2, 3, 4, 5], &[2, 9, 5, 1, 8]),
            (&[1, 2, 3], &[4, 5, 6]),
            (&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], &[3, 1, 2, 10, 4, 11, 5, 6, 9, 7]),
        ];

        for (from, to) in cases {
            let from = list(from);
            let to = list(to);
            assert_round_trip(&from, &to, MergeConfig::default());
            assert_round_trip(&from, &to, MergeConfig::moves_as_updates());
        }
    }

    // -------------------------------------------------------------------------
    // try_merge
    // -------------------------------------------------------------------------

    #[derive(Debug, Clone, PartialEq)]
    struct Ranked {
        index: usize,
        id: u32,
    }

    impl HasStableId for Ranked {
        type Id = u32;
        fn stable_id(&self) -> u32 {
            self.id
        }
    }

    impl HasSortKey for Ranked {
        type Key = usize;
        fn sort_key(&self) -> usize {
            self.index
        }
    }

    fn ranked(ids: &[u32]) -> Vec<Ranked> {
        ids.iter().enumerate().map(|(index, &id)| Ranked { index, id }).collect()
    }

    #[test]
    fn test_try_merge_accepts_well_formed() {
        let from = ranked(&[1, 2]);
        let to = ranked(&[2, 3]);
        let t = try_merge(&from, &to, MergeConfig::default()).unwrap();
        assert_eq!(t.deletions, vec![0]);
    }

    #[test]
    fn test_try_merge_rejects_duplicate_id() {
        let from = ranked(&[1, 2]);
        let to = ranked(&[3, 4, 3]);
        let err = try_merge(&from, &to, MergeConfig::default()).unwrap_err();
        assert_eq!(err, MergeError::DuplicateId { side: Side::To, first: 0, index: 2 });
    }

    #[test]
    fn test_try_merge_rejects_unordered() {
        let mut from = ranked(&[1, 2, 3]);
        from[2].index = 1;
        let to = ranked(&[1]);
        let err = try_merge(&from, &to, MergeConfig::default()).unwrap_err();
        assert_eq!(err, MergeError::Unordered { side: Side::From, index: 2 });
    }
}
