use std::sync::Arc;

use kanal::AsyncReceiver;
use lexo_core::{EventRelay, SubscriptionId};
use lexo_types::ResultEvent;

/// Bridge between the relay's synchronous callbacks and the async view loop.
/// Dropping it unsubscribes.
pub struct UiBridge {
    relay: Arc<EventRelay>,
    subscription: SubscriptionId,
}

impl UiBridge {
    pub fn attach(relay: Arc<EventRelay>) -> (Self, AsyncReceiver<ResultEvent>) {
        let (to_view_tx, to_view_rx) = kanal::unbounded_async();

        let subscription = relay.subscribe(move |event: &ResultEvent| {
            if let Err(e) = to_view_tx.try_send(event.clone()) {
                tracing::debug!("View gone, dropping {} event: {e}", event.kind());
            }
        });

        (
            UiBridge {
                relay,
                subscription,
            },
            to_view_rx,
        )
    }
}

impl Drop for UiBridge {
    fn drop(&mut self) {
        self.relay.unsubscribe(self.subscription);
    }
}
