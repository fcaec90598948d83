//! Kept-subsequence detection for matched entries.
//!
//! Given, for each entry of the next snapshot, the position of its match in
//! the previous snapshot, find the largest set of matches whose relative
//! order is unchanged. Those entries stay in place; every other match is a
//! move.
//!
//! With unique ids the previous positions are distinct, so the LCS of the
//! two id sequences restricted to common ids is exactly the longest strictly
//! increasing subsequence of previous positions.
//!
//! # Complexity
//!
//! | Case | Time | Space |
//! |------|------|-------|
//! | Already ordered (typical) | O(k) | O(k) |
//! | General | O(k log k) | O(k) |
//!
//! where `k` is the number of entries in the next snapshot.

// =============================================================================
// Main API
// =============================================================================

/// Mark the entries whose relative order survives the transition.
///
/// `matches[i]` is the previous position of next-snapshot entry `i`, or
/// `None` for a new entry. Returns a mask over `matches`; `true` means kept
/// in place. Unmatched entries are never marked.
pub(crate) fn kept_in_place(matches: &[Option<usize>]) -> Vec<bool> {
    if is_ascending(matches) {
        return matches.iter().map(Option::is_some).collect();
    }

    let mut kept = vec![false; matches.len()];

    // tails[len - 1] = (previous position, next index) of the smallest tail of
    // any increasing run of length `len` found so far
    let mut tails: Vec<(usize, usize)> = Vec::new();
    let mut predecessor: Vec<Option<usize>> = vec![None; matches.len()];

    for (idx, previous) in matches.iter().enumerate() {
        let Some(previous) = *previous else { continue };

        let len = tails.partition_point(|&(tail, _)| tail < previous);
        if len > 0 {
            predecessor[idx] = Some(tails[len - 1].1);
        }

        if len == tails.len() {
            tails.push((previous, idx));
        } else {
            tails[len] = (previous, idx);
        }
    }

    // Walk back from the tail of the longest run
    let mut cursor = tails.last().map(|&(_, idx)| idx);
    while let Some(idx) = cursor {
        kept[idx] = true;
        cursor = predecessor[idx];
    }

    kept
}

/// Fast path: matched positions already strictly increasing.
fn is_ascending(matches: &[Option<usize>]) -> bool {
    let mut last: Option<usize> = None;
    for &previous in matches.iter().flatten() {
        if last.is_some_and(|last| previous <= last) {
            return false;
        }
        last = Some(previous);
    }
    true
}

// =============================================================================
// Tests
// =============================================================================
