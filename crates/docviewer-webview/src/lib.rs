//! Web-view hosting layer for the documentation viewer.
//!
//! Provides:
//! - The typed event bridge between host and embedded renderer
//! - The custom-scheme request handler with cancellation
//! - The navigation controller deciding full loads vs in-place routing
//! - A plain file-serving mode for conventionally hosted trees
//! - The viewer facade tying the pieces together

pub mod bridge;
pub mod file_server;
pub mod navigation;
pub mod scheme;
pub mod viewer;

pub use bridge::{Backend, Bridge, EventChannel, EventEnvelope, EventType, ScriptEvaluator,
    Subscription, TypedSubscription, WebViewBackend};
pub use file_server::{FileServer, FileSource};
pub use navigation::{should_allow_page_navigation, NavigationController, PageHost};
pub use scheme::{Responder, SchemeHandler, SchemeRequestId, SchemeResponse,
    PROVIDER_ERROR_HEADER};
pub use viewer::DocumentationViewer;
