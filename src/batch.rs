//! Batch merging of many snapshot pairs.
//!
//! With the `parallel` feature, pairs are merged on the rayon thread pool.
//! A single merge stays sequential.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::algo::{merge_with_config, MergeConfig};
use crate::id::HasStableId;
use crate::transition::Transition;

/// A `(from, to)` snapshot pair.
pub type SnapshotPair<'a, E> = (&'a [E], &'a [E]);

/// Merge every pair, returning transitions in input order.
#[cfg(feature = "parallel")]
pub fn merge_batch<'a, E>(pairs: &[SnapshotPair<'a, E>], config: MergeConfig) -> Vec<Transition<&'a E>>
where
    E: HasStableId + PartialEq + Sync,
{
    pairs
        .par_iter()
        .map(|&(from, to)| merge_with_config(from, to, config))
        .collect()
}

/// Merge every pair, returning transitions in input order.
#[cfg(not(feature = "parallel"))]
pub fn merge_batch<'a, E>(pairs: &[SnapshotPair<'a, E>], config: MergeConfig) -> Vec<Transition<&'a E>>
where
    E: HasStableId + PartialEq,
{
    pairs
        .iter()
        .map(|&(from, to)| merge_with_config(from, to, config))
        .collect()
}
