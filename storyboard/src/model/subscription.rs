use std::cell::{Cell, RefCell};
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

use super::{StoryboardEvent, StoryboardModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Handle to one live event feed. Hand it back to `unsubscribe` to release it.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    events: Receiver<StoryboardEvent>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Take every event delivered so far, oldest first.
    pub fn drain(&self) -> Vec<StoryboardEvent> {
        self.events.try_iter().collect()
    }
}

/// Fan-out of storyboard events to subscribers, for model implementations.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: Cell<u64>,
    senders: RefCell<Vec<(SubscriptionId, Sender<StoryboardEvent>)>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let (sender, events) = mpsc::channel();
        self.senders.borrow_mut().push((id, sender));
        log::trace!("[listeners] subscribed {}", id);
        Subscription { id, events }
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut senders = self.senders.borrow_mut();
        let before = senders.len();
        senders.retain(|(id, _)| *id != subscription.id);
        log::trace!("[listeners] unsubscribed {}", subscription.id);
        senders.len() != before
    }

    /// Deliver `event` to every subscriber. Feeds whose handle was dropped
    /// without unsubscribing are pruned here.
    pub fn dispatch(&self, event: &StoryboardEvent) {
        self.senders
            .borrow_mut()
            .retain(|(_, sender)| sender.send(event.clone()).is_ok());
    }

    pub fn len(&self) -> usize {
        self.senders.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.borrow().is_empty()
    }
}

/// A subscription bound to its model, released when dropped.
#[derive(Debug)]
pub struct Listener<M: StoryboardModel> {
    model: M,
    subscription: Option<Subscription>,
}

impl<M: StoryboardModel> Listener<M> {
    pub fn attach(model: M) -> Self {
        let subscription = model.subscribe();
        Self {
            model,
            subscription: Some(subscription),
        }
    }

    pub fn id(&self) -> Option<SubscriptionId> {
        self.subscription.as_ref().map(Subscription::id)
    }

    pub fn drain(&self) -> Vec<StoryboardEvent> {
        self.subscription
            .as_ref()
            .map(Subscription::drain)
            .unwrap_or_default()
    }
}

impl<M: StoryboardModel> Drop for Listener<M> {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.model.unsubscribe(subscription);
        }
    }
}
