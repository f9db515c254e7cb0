//! Outbound transport and inbound decode adapter.
//!
//! The web-view engine itself stays behind two small traits: a
//! [`ScriptEvaluator`] the backend uses to run JS in the page, and the
//! engine's message callback, which the embedder forwards to
//! [`WebViewBackend::receive`].

use std::sync::Arc;

use async_trait::async_trait;
use docviewer_common::BridgeError;

use super::wire::{EventEnvelope, EventType};
use super::Bridge;

/// Outbound half of the bridge transport.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn send(&self, event_type: &EventType, data: serde_json::Value)
        -> Result<(), BridgeError>;
}

/// Executes a JavaScript snippet in the embedded page.
pub trait ScriptEvaluator: Send + Sync {
    fn evaluate(&self, script: &str) -> Result<(), BridgeError>;
}

/// JS shim wiring `window.bridge.send` to the engine's message-posting
/// primitive, for engines that expose `window.ipc.postMessage`. Injected
/// once per page by the embedder.
pub const BRIDGE_SHIM_SCRIPT: &str = r#"
(function() {
    window.bridge = window.bridge || {};
    if (!window.bridge.send && window.ipc && window.ipc.postMessage) {
        window.bridge.send = function(event) {
            window.ipc.postMessage(JSON.stringify(event));
        };
    }
})();
"#;

/// Observes client-side route changes and reports them as `didNavigate`
/// events. The renderer is a single-page app, so URL changes happen
/// without full page loads; a MutationObserver catches them.
pub const DID_NAVIGATE_OBSERVER_SCRIPT: &str = r#"
(function() {
    let lastUrl = window.location.href;
    new MutationObserver(() => {
        const url = window.location.href;
        if (url !== lastUrl) {
            lastUrl = url;
            window.bridge.send({type: "didNavigate", data: url});
        }
    }).observe(document, {subtree: true, childList: true});
})();
"#;

/// Bridge backend over a script-evaluating web-view transport.
///
/// Outbound events become `window.bridge.receive({...})` calls in the
/// page; inbound messages arrive through [`WebViewBackend::receive`] and
/// are emitted onto the owning bridge's channels.
pub struct WebViewBackend {
    bridge: Arc<Bridge>,
    evaluator: Arc<dyn ScriptEvaluator>,
}

impl WebViewBackend {
    /// Build the backend and attach it to `bridge` as the outbound
    /// transport.
    pub fn attach(bridge: Arc<Bridge>, evaluator: Arc<dyn ScriptEvaluator>) -> Arc<Self> {
        let backend = Arc::new(Self { bridge, evaluator });
        backend.bridge.attach_backend(backend.clone());
        backend
    }

    /// Inbound path: decode a raw transport message and emit it.
    ///
    /// Malformed messages are logged and dropped; they never reach
    /// subscribers.
    pub fn receive(&self, raw: &str) {
        let Some(envelope) = EventEnvelope::from_json(raw) else {
            tracing::warn!(body_len = raw.len(), "invalid message format; dropping");
            return;
        };

        let event_type = EventType::new(envelope.event_type.clone());
        self.bridge.emit_raw(&event_type, &envelope.payload());
    }
}

#[async_trait]
impl Backend for WebViewBackend {
    async fn send(
        &self,
        event_type: &EventType,
        data: serde_json::Value,
    ) -> Result<(), BridgeError> {
        let envelope = super::wire::encode_envelope(event_type, &data)?;
        let script = format!("window.bridge.receive({envelope})");

        tracing::debug!(event_type = %event_type, "sending event to renderer");
        self.evaluator.evaluate(&script)
    }
}
