//! Change notification for flight plans.
//!
//! Only a decode replaces a plan as a whole, so only decodes are announced. In-place edits
//! (densification, bulk setters) are not published.
use std::fmt;

use tracing::trace;

use crate::model::PlanContents;

#[derive(Debug, Clone, PartialEq)]
pub enum PlanEvent {
    /// A decode succeeded. Carries a snapshot of the new plan, which is empty for "no plan"
    /// input.
    Replaced(PlanContents),
    /// A decode failed and the plan was cleared.
    Failed(String),
}

/// Registry of subscribers. Each subscriber gets its own unbounded channel.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<flume::Sender<PlanEvent>>,
}

impl EventBus {
    pub fn subscribe(&mut self) -> flume::Receiver<PlanEvent> {
        let (tx, rx) = flume::unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn num_subscribers(&self) -> usize {
        self.subscribers.len()
    }

    /// Send `event` to every live subscriber, dropping the ones whose receiver is gone.
    pub(crate) fn publish(&mut self, event: PlanEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        trace!("published plan event to {} subscribers", self.subscribers.len());
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
