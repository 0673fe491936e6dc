// Deferred actions
// Work scheduled from inside an event handler that must only run once the
// current dispatch turn has finished.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Re-arm blur handling for the pending event's title field.
    ClearIgnoreBlur,
}

/// FIFO of actions for the next scheduling turn.
///
/// Actions scheduled while a turn is being flushed wait for the following one.
#[derive(Debug, Default)]
pub struct TurnQueue {
    queue: VecDeque<DeferredAction>,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, action: DeferredAction) {
        self.queue.push_back(action);
    }

    /// Take everything scheduled so far, leaving the queue empty.
    pub fn drain_turn(&mut self) -> Vec<DeferredAction> {
        self.queue.drain(..).collect()
    }
}
