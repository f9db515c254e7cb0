//! Navigation state and routing decisions.

use std::sync::Arc;

use docviewer_core::TopicUrl;
use url::Url;

use crate::bridge::{Bridge, EventType};

/// The embedding web view, as far as navigation is concerned.
///
/// Implemented by the GUI layer over whatever engine it hosts.
pub trait PageHost: Send + Sync {
    /// Perform a full page load of `url`.
    fn load_url(&self, url: &Url);
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn go_back(&self);
    fn go_forward(&self);
}

/// Whether the embedding web view should allow a page navigation to
/// `url`.
///
/// Only documentation scheme content renders inside the view; the
/// embedder cancels anything else, and the renderer reports those links
/// as `openURL` events for the host to handle.
pub fn should_allow_page_navigation(url: &Url) -> bool {
    url.scheme() == "doc"
}

/// Tracks the renderer's current topic and decides, per outbound
/// navigation, between a full page load and an in-place client-side
/// route change.
///
/// Owned and driven by a single control context; the async `navigate`
/// suspends only for the bridge handoff.
pub struct NavigationController {
    bridge: Arc<Bridge>,
    host: Arc<dyn PageHost>,
    current_topic: Option<TopicUrl>,
    can_go_back: bool,
    can_go_forward: bool,
}

impl NavigationController {
    pub fn new(bridge: Arc<Bridge>, host: Arc<dyn PageHost>) -> Self {
        Self {
            bridge,
            host,
            current_topic: None,
            can_go_back: false,
            can_go_forward: false,
        }
    }

    pub fn current_topic(&self) -> Option<&TopicUrl> {
        self.current_topic.as_ref()
    }

    pub fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    pub fn can_go_forward(&self) -> bool {
        self.can_go_forward
    }

    /// Apply a `didNavigate` event from the renderer.
    ///
    /// Unparseable URLs are logged and ignored; the previous state stays
    /// in place.
    pub fn handle_did_navigate(&mut self, url_str: &str) {
        let topic = Url::parse(url_str)
            .ok()
            .as_ref()
            .and_then(TopicUrl::from_url);

        let Some(topic) = topic else {
            tracing::warn!(url = %url_str, "didNavigate carried an unusable URL; ignoring");
            return;
        };

        self.can_go_back = self.host.can_go_back();
        self.can_go_forward = self.host.can_go_forward();

        tracing::debug!(topic = %topic, "renderer navigated");
        self.current_topic = Some(topic);
    }

    /// Navigate the renderer to `target`.
    ///
    /// Same-topic requests are coalesced. Cross-bundle targets need a
    /// full page load since the loaded client app only routes within its
    /// own bundle; same-bundle targets go through the bridge and the
    /// renderer's client-side router.
    pub async fn navigate(&mut self, target: TopicUrl) {
        if self.current_topic.as_ref() == Some(&target) {
            tracing::debug!(topic = %target, "already showing topic; skipping");
            return;
        }

        let same_bundle = self
            .current_topic
            .as_ref()
            .is_some_and(|current| current.bundle_identifier == target.bundle_identifier);

        // The pointer moves before the operation completes so immediate
        // repeats of the same target coalesce.
        self.current_topic = Some(target.clone());

        if same_bundle {
            tracing::debug!(topic = %target, "in-place navigation");
            if let Err(err) = self.bridge.send(&EventType::NAVIGATION, &target.path).await {
                tracing::warn!(topic = %target, error = %err, "navigation event send failed");
            }
        } else {
            tracing::debug!(topic = %target, "full page load");
            match target.url() {
                Some(url) => self.host.load_url(&url),
                None => tracing::warn!(topic = %target, "target does not form a valid URL"),
            }
        }
    }

    pub fn go_back(&self) {
        self.host.go_back();
    }

    pub fn go_forward(&self) {
        self.host.go_forward();
    }
}
