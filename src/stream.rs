//! Snapshot streams (requires `async` feature).
//!
//! Adapts a stream of snapshots (one per upstream state change) into a
//! stream of transitions, each diffed against the snapshot before it.

use futures_util::stream::{Stream, StreamExt};

use crate::algo::MergeConfig;
use crate::id::HasStableId;
use crate::snapshot::SnapshotCell;
use crate::transition::Transition;

/// Turn a stream of snapshots into a stream of transitions.
///
/// The first transition is `initial` and inserts the whole first snapshot.
///
/// # Example
///
/// ```ignore
/// let results = search_results(query);          // impl Stream<Item = Vec<Entry>>
/// let mut transitions = transitions(results, MergeConfig::default());
/// while let Some(t) = transitions.next().await {
///     queue.enqueue(t.map(make_item));
/// }
/// ```
pub fn transitions<S, E>(snapshots: S, config: MergeConfig) -> impl Stream<Item = Transition<E>>
where
    S: Stream<Item = Vec<E>>,
    E: HasStableId + PartialEq + Clone,
{
    let cell = SnapshotCell::with_config(config);
    snapshots.map(move |next| cell.advance(next))
}
