//! Typed event bridge between host and embedded renderer.
//!
//! The bridge keeps one [`EventChannel`] per [`EventType`]. Inbound
//! renderer events are emitted into the matching channel and fan out to
//! every subscriber; outbound events are encoded and handed to the
//! attached [`Backend`].

mod backend;
mod channel;
mod wire;

pub use backend::{Backend, ScriptEvaluator, WebViewBackend, BRIDGE_SHIM_SCRIPT,
    DID_NAVIGATE_OBSERVER_SCRIPT};
pub use channel::{EventChannel, Subscription, TypedSubscription};
pub use wire::{encode_envelope, EventEnvelope, EventType};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use docviewer_common::BridgeError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Many-to-many pub/sub hub over a single renderer transport.
pub struct Bridge {
    channels: Mutex<HashMap<EventType, Arc<EventChannel>>>,
    backend: RwLock<Option<Arc<dyn Backend>>>,
}

impl Bridge {
    pub fn new() -> Self {
        Self {
            channels: Mutex::new(HashMap::new()),
            backend: RwLock::new(None),
        }
    }

    /// Attach the outbound transport. Replaces any previous backend.
    pub fn attach_backend(&self, backend: Arc<dyn Backend>) {
        if let Ok(mut slot) = self.backend.write() {
            *slot = Some(backend);
        }
    }

    /// The channel for `event_type`, created on first use. Idempotent by
    /// key: both handles address the same underlying channel.
    pub fn channel(&self, event_type: &EventType) -> Arc<EventChannel> {
        let mut channels = match self.channels.lock() {
            Ok(channels) => channels,
            Err(poisoned) => poisoned.into_inner(),
        };

        Arc::clone(
            channels
                .entry(event_type.clone())
                .or_insert_with(|| Arc::new(EventChannel::new())),
        )
    }

    fn existing_channel(&self, event_type: &EventType) -> Option<Arc<EventChannel>> {
        self.channels
            .lock()
            .ok()
            .and_then(|channels| channels.get(event_type).cloned())
    }

    /// Deliver raw payload bytes to every subscriber of `event_type`.
    ///
    /// Emitting onto a type nobody ever subscribed to is a no-op.
    pub fn emit_raw(&self, event_type: &EventType, data: &[u8]) {
        match self.existing_channel(event_type) {
            Some(channel) => {
                tracing::debug!(event_type = %event_type, bytes = data.len(), "event emitted");
                channel.emit(data);
            }
            None => {
                tracing::debug!(event_type = %event_type, "no one is listening; dropping event");
            }
        }
    }

    /// Encode `value` as JSON and emit it.
    pub fn emit<T: Serialize>(
        &self,
        event_type: &EventType,
        value: &T,
    ) -> Result<(), BridgeError> {
        let data = serde_json::to_vec(value)?;
        self.emit_raw(event_type, &data);
        Ok(())
    }

    /// Subscribe to raw payloads of `event_type`.
    pub fn subscribe(&self, event_type: &EventType) -> Subscription {
        self.channel(event_type).subscribe()
    }

    /// Subscribe with typed decoding. A payload that fails to decode ends
    /// this subscription only.
    pub fn subscribe_as<T: DeserializeOwned>(&self, event_type: &EventType) -> TypedSubscription<T> {
        self.subscribe(event_type).typed(event_type.clone())
    }

    /// Send an event to the renderer through the attached backend.
    ///
    /// Best-effort: without a backend the send is logged and dropped
    /// rather than surfaced to the caller.
    pub async fn send<T: Serialize + Sync>(
        &self,
        event_type: &EventType,
        data: &T,
    ) -> Result<(), BridgeError> {
        let backend = self
            .backend
            .read()
            .ok()
            .and_then(|slot| slot.as_ref().cloned());

        let Some(backend) = backend else {
            tracing::warn!(event_type = %event_type, "backend not attached; cannot send");
            return Ok(());
        };

        let value = serde_json::to_value(data)?;
        backend.send(event_type, value).await
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new()
    }
}
