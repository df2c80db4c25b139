use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lexo_types::ResultEvent;
use uuid::Uuid;

pub type SubscriptionId = Uuid;

/// Receives every event published on a relay
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &ResultEvent);
}

impl<F> EventHandler for F
where
    F: Fn(&ResultEvent) + Send + Sync,
{
    fn handle(&self, event: &ResultEvent) {
        self(event)
    }
}

type Subscriber = (SubscriptionId, Arc<dyn EventHandler>);

/// Publish/subscribe hub between the orchestrator and the view.
///
/// Handlers run synchronously on the publishing task. Subscribing or
/// unsubscribing from inside a handler is allowed: a publish notifies
/// the handlers registered when it started that are still registered
/// when their turn comes, each exactly once.
#[derive(Default)]
pub struct EventRelay {
    subscribers: Mutex<Vec<Subscriber>>,
    loading: AtomicBool,
}

impl EventRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl EventHandler + 'static) -> SubscriptionId {
        let id = Uuid::new_v4();
        self.subscribers().push((id, Arc::new(handler)));
        tracing::debug!("Subscriber {id} registered");
        id
    }

    /// Returns false if `id` was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);

        let removed = subscribers.len() != before;
        if removed {
            tracing::debug!("Subscriber {id} removed");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers().len()
    }

    pub fn publish(&self, event: ResultEvent) {
        if let ResultEvent::Loading(loading) = event {
            self.loading.store(loading, Ordering::SeqCst);
        }

        // Snapshot so handlers can (un)subscribe without deadlocking
        let snapshot: Vec<Subscriber> = self.subscribers().clone();
        tracing::trace!("Publishing {} to {} subscribers", event.kind(), snapshot.len());

        for (id, handler) in snapshot {
            if !self.is_subscribed(id) {
                continue;
            }

            if catch_unwind(AssertUnwindSafe(|| handler.handle(&event))).is_err() {
                tracing::error!("Subscriber {id} panicked on {} event", event.kind());
            }
        }
    }

    pub fn set_loading(&self, loading: bool) {
        self.publish(ResultEvent::Loading(loading));
    }

    /// Last published loading flag
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers().iter().any(|(sub_id, _)| *sub_id == id)
    }

    fn subscribers(&self) -> MutexGuard<'_, Vec<Subscriber>> {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
