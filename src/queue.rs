//! Deferred transition queue.
//!
//! Transitions are prepared off the UI context and handed to the consumer
//! in order. A consumer that cannot apply them yet (no layout) marks itself
//! not ready; transitions pile up and are released first-in first-out once
//! it becomes ready.

use std::collections::VecDeque;

use crate::transition::Transition;

/// FIFO of transitions gated on consumer readiness.
///
/// Owned by the single context that applies transitions.
#[derive(Debug)]
pub struct TransitionQueue<T> {
    pending: VecDeque<Transition<T>>,
    ready: bool,
}

impl<T> Default for TransitionQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TransitionQueue<T> {
    /// Create an empty queue whose consumer is not ready yet.
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            ready: false,
        }
    }

    /// Queue a transition.
    pub fn enqueue(&mut self, transition: Transition<T>) {
        if !self.ready {
            tracing::trace!(pending = self.pending.len() + 1, "deferred transition");
        }
        self.pending.push_back(transition);
    }

    /// Mark whether the consumer can apply transitions.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Whether `drain` releases transitions.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Number of queued transitions.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take queued transitions in FIFO order.
    ///
    /// Yields nothing while the consumer is not ready; queued transitions
    /// stay queued.
    pub fn drain(&mut self) -> impl Iterator<Item = Transition<T>> + '_ {
        let count = if self.ready { self.pending.len() } else { 0 };
        self.pending.drain(..count)
    }
}
