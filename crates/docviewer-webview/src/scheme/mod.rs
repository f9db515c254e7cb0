//! Custom-scheme request handling.
//!
//! Each request runs as its own task: resolve the URL, fetch bytes from
//! the provider, build an HTTP-shaped response, deliver it through the
//! caller's responder. The in-flight table keyed by request id makes
//! cancellation race-free: a response is only delivered by the task that
//! still finds its own entry in the table, so a stopped request delivers
//! nothing even when its fetch already finished.

mod response;

pub use response::{SchemeResponse, PROVIDER_ERROR_HEADER};

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use docviewer_core::{mime, Resource, ResourceProvider, ThemeSettings};
use tokio::task::JoinHandle;
use url::Url;

/// Transport-assigned identity of one in-flight request.
pub type SchemeRequestId = u64;

/// Delivers the finished response back to the transport. The embedder is
/// responsible for marshalling onto its control thread.
pub type Responder = Box<dyn FnOnce(SchemeResponse) + Send + 'static>;

/// Handles requests on the documentation scheme.
pub struct SchemeHandler {
    inner: Arc<HandlerState>,
}

struct HandlerState {
    provider: Arc<dyn ResourceProvider>,
    custom_theme_enabled: AtomicBool,
    global_theme: RwLock<Option<ThemeSettings>>,
    tasks: Mutex<HashMap<SchemeRequestId, Option<JoinHandle<()>>>>,
}

impl SchemeHandler {
    pub fn new(provider: Arc<dyn ResourceProvider>) -> Self {
        Self {
            inner: Arc::new(HandlerState {
                provider,
                custom_theme_enabled: AtomicBool::new(false),
                global_theme: RwLock::new(None),
                tasks: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Enable fetching per-session theme settings through the provider.
    pub fn set_custom_theme_enabled(&self, enabled: bool) {
        self.inner.custom_theme_enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn custom_theme_enabled(&self) -> bool {
        self.inner.custom_theme_enabled.load(Ordering::Relaxed)
    }

    /// Set or clear the process-wide theme settings. When set, they take
    /// precedence over provider-supplied theme data.
    pub fn set_global_theme(&self, theme: Option<ThemeSettings>) {
        if let Ok(mut slot) = self.inner.global_theme.write() {
            *slot = theme;
        }
    }

    pub fn in_flight_count(&self) -> usize {
        self.inner.tasks.lock().map(|tasks| tasks.len()).unwrap_or(0)
    }

    /// Begin handling a request. The responder fires at most once; it
    /// never fires after [`SchemeHandler::stop_request`] for the same id.
    pub fn start_request(&self, id: SchemeRequestId, url: Url, respond: Responder) {
        let state = Arc::clone(&self.inner);

        // The entry must exist before the task runs so completion can
        // prove the request was not cancelled in the meantime.
        if let Ok(mut tasks) = state.tasks.lock() {
            tasks.insert(id, None);
        }

        let task_state = Arc::clone(&state);
        let handle = tokio::spawn(async move {
            if !task_state.is_in_flight(id) {
                return;
            }

            let response = task_state.load_resource(&url).await;

            // Deliver only if still in flight; removing our own entry
            // makes the delivery exclusive.
            let deliver = task_state
                .tasks
                .lock()
                .map(|mut tasks| tasks.remove(&id).is_some())
                .unwrap_or(false);

            if deliver {
                respond(response);
            } else {
                tracing::debug!(request = id, "request cancelled; dropping response");
            }
        });

        // Store the handle for stop_request; the task may already have
        // completed and removed its entry, in which case there is
        // nothing to track.
        let locked = state.tasks.lock();
        if let Ok(mut tasks) = locked {
            if let Some(entry) = tasks.get_mut(&id) {
                *entry = Some(handle);
            }
        }
    }

    /// Cancel an in-flight request. Its responder will not be called.
    pub fn stop_request(&self, id: SchemeRequestId) {
        let entry = self
            .inner
            .tasks
            .lock()
            .ok()
            .and_then(|mut tasks| tasks.remove(&id));

        if let Some(entry) = entry {
            tracing::info!(request = id, "cancelling request");
            if let Some(handle) = entry {
                handle.abort();
            }
        }
    }
}

impl HandlerState {
    fn is_in_flight(&self, id: SchemeRequestId) -> bool {
        self.tasks
            .lock()
            .map(|tasks| tasks.contains_key(&id))
            .unwrap_or(false)
    }

    async fn load_resource(&self, url: &Url) -> SchemeResponse {
        let Some(resource) = Resource::resolve(url) else {
            tracing::warn!(url = %url, "[GET] not a resource URL");
            return SchemeResponse::not_found();
        };

        if resource.is_theme_settings() {
            return self.theme_settings_response(&resource).await;
        }

        match self.provider.provide(&resource).await {
            Ok(data) => {
                let mime_type =
                    mime::mime_for_extension(mime::extension_of(url.path())).unwrap_or("text/html");
                tracing::info!(
                    url = %url,
                    bytes = data.len(),
                    mime = mime_type,
                    "[GET] provided resource"
                );
                SchemeResponse::ok(mime_type, data)
            }
            Err(err) => {
                tracing::error!(url = %url, error = %err, "[GET] failed to load resource");
                SchemeResponse::error(404, Some(&err.to_string()))
            }
        }
    }

    /// Theme settings get an override chain instead of the generic path:
    /// provider-supplied custom theme first, then the process-wide theme
    /// on top of it, 404 when neither yields data.
    async fn theme_settings_response(&self, resource: &Resource) -> SchemeResponse {
        let mut body: Option<Vec<u8>> = None;

        if self.custom_theme_enabled.load(Ordering::Relaxed) {
            match self.provider.provide(resource).await {
                Ok(data) => body = Some(data),
                Err(err) => {
                    tracing::info!(error = %err, "custom theme settings unavailable");
                }
            }
        }

        let global = self
            .global_theme
            .read()
            .ok()
            .and_then(|slot| slot.as_ref().cloned());

        if let Some(theme) = global {
            match serde_json::to_vec(&theme) {
                Ok(data) => body = Some(data),
                Err(err) => {
                    tracing::error!(error = %err, "failed to encode global theme settings");
                    return SchemeResponse::error(500, Some(&err.to_string()));
                }
            }
        }

        match body {
            Some(data) => SchemeResponse::ok("application/json", data),
            None => SchemeResponse::not_found(),
        }
    }
}
