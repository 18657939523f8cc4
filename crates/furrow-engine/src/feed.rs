//! Transition feed: phase changes pushed to subscribers.
//!
//! Each subscriber owns a bounded channel. Publishing never blocks: a
//! subscriber whose buffer is full, or whose receiver was dropped, is
//! removed from the feed.

use crossbeam_channel::{Receiver, Sender, TrySendError};

use furrow_core::{LocationId, Timestamp};

use crate::phase::RunPhase;

/// One phase change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseTransition {
    /// Phase before the change.
    pub from: RunPhase,
    /// Phase after the change.
    pub to: RunPhase,
    /// Current location after the change, if any.
    pub location: Option<LocationId>,
    /// Host time of the evaluation that caused the change. `None` for
    /// changes caused by commands between ticks.
    pub at: Option<Timestamp>,
}

pub(crate) struct TransitionFeed {
    capacity: usize,
    subscribers: Vec<Sender<PhaseTransition>>,
}

impl TransitionFeed {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            subscribers: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self) -> Receiver<PhaseTransition> {
        let (tx, rx) = crossbeam_channel::bounded(self.capacity);
        self.subscribers.push(tx);
        rx
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver `t` to every subscriber. Returns how many were dropped.
    pub(crate) fn publish(&mut self, t: &PhaseTransition) -> usize {
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| match tx.try_send(t.clone()) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                log::warn!("transition feed subscriber fell behind; dropping it");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                log::warn!("transition feed subscriber disconnected; dropping it");
                false
            }
        });
        before - self.subscribers.len()
    }
}
