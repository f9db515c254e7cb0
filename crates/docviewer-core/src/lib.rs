//! Core resource model for the documentation viewer.
//!
//! Provides:
//! - Classification of `doc://` request URLs into typed resources
//! - The provider SPI that supplies resource bytes
//! - Topic addressing for navigation
//! - Theme-settings value objects the renderer consumes as JSON

pub mod mime;
pub mod provider;
pub mod resource;
pub mod theme;
pub mod topic;

pub use provider::{
    AnyResourceProvider, AppResourceProvider, BundleResourceProvider, ResourceProvider,
};
pub use resource::{AppSource, AppSourceKind, BundleAsset, BundleAssetKind, Resource};
pub use theme::{ColorScheme, ColorVar, ThemeColor, ThemeSettings};
pub use topic::TopicUrl;
