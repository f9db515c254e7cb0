//! Single-event-type broadcast channel.
//!
//! Each subscriber owns an unbounded queue, so `emit` never blocks on a
//! slow consumer; it pushes into every live queue and prunes the dead
//! ones. Dropping a [`Subscription`] deregisters its sink.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, Weak};

use serde::de::DeserializeOwned;
use tokio::sync::mpsc;
use uuid::Uuid;

use super::wire::EventType;

/// Fan-out point for one event type.
pub struct EventChannel {
    listeners: Mutex<HashMap<Uuid, mpsc::UnboundedSender<Vec<u8>>>>,
}

impl EventChannel {
    pub(crate) fn new() -> Self {
        Self {
            listeners: Mutex::new(HashMap::new()),
        }
    }

    /// Deliver a payload to every current subscriber.
    pub fn emit(&self, data: &[u8]) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.retain(|_, sink| sink.send(data.to_vec()).is_ok());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.lock().map(|l| l.is_empty()).unwrap_or(true)
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }

    /// Register a new subscriber. The returned subscription observes
    /// every payload emitted after this call; its backlog starts empty.
    pub fn subscribe(self: &Arc<Self>) -> Subscription {
        let (sink, source) = mpsc::unbounded_channel();
        let id = Uuid::new_v4();

        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.insert(id, sink);
        }

        Subscription {
            id,
            source,
            channel: Arc::downgrade(self),
        }
    }

    fn remove_listener(&self, id: Uuid) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.remove(&id);
        }
    }
}

/// One subscriber's view of an [`EventChannel`]: an infinite sequence of
/// raw payloads, live until dropped.
pub struct Subscription {
    id: Uuid,
    source: mpsc::UnboundedReceiver<Vec<u8>>,
    channel: Weak<EventChannel>,
}

impl Subscription {
    /// Next raw payload; `None` once the owning channel is gone.
    pub async fn recv(&mut self) -> Option<Vec<u8>> {
        self.source.recv().await
    }

    /// Wrap into a typed sequence decoding each payload as `T`.
    pub fn typed<T: DeserializeOwned>(self, event_type: EventType) -> TypedSubscription<T> {
        TypedSubscription {
            inner: Some(self),
            event_type,
            _marker: PhantomData,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(channel) = self.channel.upgrade() {
            channel.remove_listener(self.id);
        }
    }
}

/// A subscription that decodes payloads into `T`.
///
/// A decode failure is terminal for this subscriber alone: the error is
/// yielded once, the underlying sink is deregistered, and subsequent
/// `recv` calls return `None`. Sibling subscribers are unaffected.
pub struct TypedSubscription<T> {
    inner: Option<Subscription>,
    event_type: EventType,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> TypedSubscription<T> {
    pub async fn recv(&mut self) -> Option<Result<T, serde_json::Error>> {
        let subscription = self.inner.as_mut()?;
        let raw = subscription.recv().await?;

        match serde_json::from_slice(&raw) {
            Ok(value) => Some(Ok(value)),
            Err(err) => {
                tracing::error!(
                    event_type = %self.event_type,
                    payload = %String::from_utf8_lossy(&raw),
                    error = %err,
                    "failed to decode event payload; terminating subscription"
                );
                self.inner = None;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_to_every_subscriber() {
        let channel = Arc::new(EventChannel::new());
        let mut a = channel.subscribe();
        let mut b = channel.subscribe();

        channel.emit(b"payload");

        assert_eq!(a.recv().await.unwrap(), b"payload");
        assert_eq!(b.recv().await.unwrap(), b"payload");
    }

    #[tokio::test]
    async fn backlog_starts_empty_per_subscription() {
        let channel = Arc::new(EventChannel::new());
        channel.emit(b"before");

        let mut late = channel.subscribe();
        channel.emit(b"after");

        assert_eq!(late.recv().await.unwrap(), b"after");
    }

    #[tokio::test]
    async fn dropped_subscription_is_deregistered() {
        let channel = Arc::new(EventChannel::new());
        let first = channel.subscribe();
        let _second = channel.subscribe();
        assert_eq!(channel.subscriber_count(), 2);

        drop(first);
        assert_eq!(channel.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn emit_without_subscribers_is_harmless() {
        let channel = Arc::new(EventChannel::new());
        assert!(channel.is_empty());
        channel.emit(b"into the void");
    }

    #[tokio::test]
    async fn typed_subscription_decodes_values() {
        let channel = Arc::new(EventChannel::new());
        let mut sub = channel.subscribe().typed::<String>(EventType::DID_NAVIGATE);

        channel.emit(br#""doc://a/documentation/x""#);

        let value = sub.recv().await.unwrap().unwrap();
        assert_eq!(value, "doc://a/documentation/x");
    }

    #[tokio::test]
    async fn decode_failure_terminates_only_that_subscriber() {
        let channel = Arc::new(EventChannel::new());
        let mut typed = channel.subscribe().typed::<u32>(EventType::new("count"));
        let mut raw = channel.subscribe();

        channel.emit(br#""not a number""#);

        assert!(typed.recv().await.unwrap().is_err());
        assert!(typed.recv().await.is_none(), "typed sequence must be terminal");

        // The raw sibling still observes everything.
        assert_eq!(raw.recv().await.unwrap(), br#""not a number""#);
        channel.emit(br#"42"#);
        assert_eq!(raw.recv().await.unwrap(), br#"42"#);

        // The failed subscriber's sink is gone from the registry.
        assert_eq!(channel.subscriber_count(), 1);
    }
}
