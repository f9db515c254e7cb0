//! Viewer assembly.
//!
//! Wires the bridge, the scheme handler, and the navigation controller
//! together and runs the `didNavigate` monitor. The GUI layer owns the
//! actual widget; it hands in a [`PageHost`] and forwards engine
//! callbacks to the backend.

use std::sync::Arc;

use docviewer_core::{ResourceProvider, ThemeSettings, TopicUrl};
use tokio::task::JoinHandle;

use crate::bridge::{Bridge, EventType, ScriptEvaluator, WebViewBackend};
use crate::navigation::{NavigationController, PageHost};
use crate::scheme::SchemeHandler;

/// Hosts one embedded documentation renderer.
pub struct DocumentationViewer {
    bridge: Arc<Bridge>,
    scheme_handler: SchemeHandler,
    host: Arc<dyn PageHost>,
    navigation: Arc<tokio::sync::Mutex<NavigationController>>,
    monitor: JoinHandle<()>,
}

impl DocumentationViewer {
    pub fn new(provider: Arc<dyn ResourceProvider>, host: Arc<dyn PageHost>) -> Self {
        let bridge = Arc::new(Bridge::new());
        let navigation = Arc::new(tokio::sync::Mutex::new(NavigationController::new(
            Arc::clone(&bridge),
            Arc::clone(&host),
        )));

        let monitor = Self::spawn_monitor(Arc::clone(&bridge), Arc::clone(&navigation));

        Self {
            bridge,
            scheme_handler: SchemeHandler::new(provider),
            host,
            navigation,
            monitor,
        }
    }

    /// Watches renderer navigation reports and keeps the controller's
    /// state current.
    ///
    /// The subscription is registered before the task is spawned so an
    /// event arriving right after construction cannot slip past it.
    fn spawn_monitor(
        bridge: Arc<Bridge>,
        navigation: Arc<tokio::sync::Mutex<NavigationController>>,
    ) -> JoinHandle<()> {
        let mut changes = bridge.subscribe_as::<String>(&EventType::DID_NAVIGATE);

        tokio::spawn(async move {
            while let Some(event) = changes.recv().await {
                match event {
                    Ok(url) => navigation.lock().await.handle_did_navigate(&url),
                    Err(err) => {
                        tracing::error!(error = %err, "didNavigate monitoring failed");
                    }
                }
            }
        })
    }

    pub fn bridge(&self) -> &Arc<Bridge> {
        &self.bridge
    }

    pub fn scheme_handler(&self) -> &SchemeHandler {
        &self.scheme_handler
    }

    /// Attach the renderer transport. The embedder forwards the engine's
    /// message callback to the returned backend's `receive`.
    pub fn connect(&self, evaluator: Arc<dyn ScriptEvaluator>) -> Arc<WebViewBackend> {
        WebViewBackend::attach(Arc::clone(&self.bridge), evaluator)
    }

    /// URLs the renderer asked to open outside the documentation scheme.
    /// The embedder typically hands these to the system browser.
    pub fn external_link_requests(&self) -> crate::bridge::TypedSubscription<String> {
        self.bridge.subscribe_as::<String>(&EventType::OPEN_URL)
    }

    pub async fn navigate(&self, target: TopicUrl) {
        self.navigation.lock().await.navigate(target).await;
    }

    pub async fn current_topic(&self) -> Option<TopicUrl> {
        self.navigation.lock().await.current_topic().cloned()
    }

    pub async fn can_go_back(&self) -> bool {
        self.navigation.lock().await.can_go_back()
    }

    pub async fn can_go_forward(&self) -> bool {
        self.navigation.lock().await.can_go_forward()
    }

    pub async fn go_back(&self) {
        self.navigation.lock().await.go_back();
    }

    pub async fn go_forward(&self) {
        self.navigation.lock().await.go_forward();
    }

    /// Replace the process-wide theme settings and re-render the current
    /// topic so the renderer picks them up.
    pub async fn set_global_theme(&self, theme: Option<ThemeSettings>) {
        self.scheme_handler.set_global_theme(theme);
        self.reload_current_topic().await;
    }

    /// Toggle per-session custom theme fetching and re-render.
    pub async fn set_custom_theme_enabled(&self, enabled: bool) {
        self.scheme_handler.set_custom_theme_enabled(enabled);
        self.reload_current_topic().await;
    }

    /// Theme settings are read by the renderer at page load, so a change
    /// only takes effect through a full reload of the current topic.
    async fn reload_current_topic(&self) {
        let current = self.navigation.lock().await.current_topic().cloned();
        if let Some(topic) = current {
            if let Some(url) = topic.url() {
                tracing::debug!(topic = %topic, "reloading for settings change");
                self.host.load_url(&url);
            }
        }
    }
}

impl Drop for DocumentationViewer {
    fn drop(&mut self) {
        self.monitor.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::ScriptEvaluator;
    use async_trait::async_trait;
    use docviewer_common::{BridgeError, ProviderError};
    use docviewer_core::{
        AppResourceProvider, AppSourceKind, BundleAssetKind, BundleResourceProvider,
    };
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use url::Url;

    struct EmptyProvider;

    #[async_trait]
    impl BundleResourceProvider for EmptyProvider {
        async fn provide_asset(
            &self,
            _kind: BundleAssetKind,
            _bundle_identifier: &str,
            _path: &str,
        ) -> Result<Vec<u8>, ProviderError> {
            Err(ProviderError::NotFound)
        }
    }

    #[async_trait]
    impl AppResourceProvider for EmptyProvider {
        async fn provide_source(
            &self,
            _kind: AppSourceKind,
            _path: &str,
        ) -> Result<Vec<u8>, ProviderError> {
            Err(ProviderError::NotFound)
        }
    }

    impl ResourceProvider for EmptyProvider {}

    #[derive(Default)]
    struct MockHost {
        loaded: Mutex<Vec<String>>,
        back: AtomicBool,
    }

    impl PageHost for MockHost {
        fn load_url(&self, url: &Url) {
            self.loaded.lock().unwrap().push(url.to_string());
        }

        fn can_go_back(&self) -> bool {
            self.back.load(Ordering::SeqCst)
        }

        fn can_go_forward(&self) -> bool {
            false
        }

        fn go_back(&self) {}
        fn go_forward(&self) {}
    }

    struct NullEvaluator;

    impl ScriptEvaluator for NullEvaluator {
        fn evaluate(&self, _script: &str) -> Result<(), BridgeError> {
            Ok(())
        }
    }

    fn viewer() -> (DocumentationViewer, Arc<MockHost>) {
        let host = Arc::new(MockHost::default());
        (
            DocumentationViewer::new(Arc::new(EmptyProvider), host.clone()),
            host,
        )
    }

    async fn wait_for_topic(viewer: &DocumentationViewer) -> Option<TopicUrl> {
        for _ in 0..100 {
            if let Some(topic) = viewer.current_topic().await {
                return Some(topic);
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        None
    }

    #[tokio::test]
    async fn did_navigate_event_updates_current_topic() {
        let (viewer, host) = viewer();
        host.back.store(true, Ordering::SeqCst);
        let backend = viewer.connect(Arc::new(NullEvaluator));

        backend.receive(r#"{"type":"didNavigate","data":"doc://com.example.A/documentation/a"}"#);

        let topic = wait_for_topic(&viewer).await.expect("monitor should apply event");
        assert_eq!(topic, TopicUrl::new("com.example.A", "/documentation/a"));
        assert!(viewer.can_go_back().await);
    }

    #[tokio::test]
    async fn external_links_surface_through_the_facade() {
        let (viewer, _) = viewer();
        let backend = viewer.connect(Arc::new(NullEvaluator));
        let mut links = viewer.external_link_requests();

        backend.receive(r#"{"type":"openURL","data":"https://example.com/blog"}"#);

        let url = links.recv().await.unwrap().unwrap();
        assert_eq!(url, "https://example.com/blog");
    }

    #[tokio::test]
    async fn theme_change_reloads_current_topic() {
        let (viewer, host) = viewer();

        viewer
            .navigate(TopicUrl::new("com.example.A", "/documentation/a"))
            .await;
        assert_eq!(host.loaded.lock().unwrap().len(), 1);

        viewer.set_global_theme(Some(ThemeSettings::default())).await;

        let loaded = host.loaded.lock().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1], "doc://com.example.A/documentation/a");
    }

    #[tokio::test]
    async fn theme_change_without_topic_does_not_load() {
        let (viewer, host) = viewer();
        viewer.set_custom_theme_enabled(true).await;
        assert!(host.loaded.lock().unwrap().is_empty());
    }
}
