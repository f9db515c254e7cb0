//! Provider SPI for resource bytes.
//!
//! Two narrow provider traits cover the two halves of the resource
//! taxonomy; `AnyResourceProvider` glues an app provider and a bundle
//! provider into one `ResourceProvider` the scheme handler can hold.

use std::sync::Arc;

use async_trait::async_trait;
use docviewer_common::ProviderError;

use crate::resource::{AppSourceKind, BundleAssetKind, Resource};

/// Supplies assets scoped to a documentation bundle.
#[async_trait]
pub trait BundleResourceProvider: Send + Sync {
    async fn provide_asset(
        &self,
        kind: BundleAssetKind,
        bundle_identifier: &str,
        path: &str,
    ) -> Result<Vec<u8>, ProviderError>;
}

/// Supplies static source files of the renderer app.
#[async_trait]
pub trait AppResourceProvider: Send + Sync {
    async fn provide_source(&self, kind: AppSourceKind, path: &str)
        -> Result<Vec<u8>, ProviderError>;
}

/// A provider that can serve any resolved [`Resource`].
#[async_trait]
pub trait ResourceProvider: BundleResourceProvider + AppResourceProvider {
    async fn provide(&self, resource: &Resource) -> Result<Vec<u8>, ProviderError> {
        match resource {
            Resource::BundleAsset(asset) => {
                self.provide_asset(asset.kind, &asset.bundle_identifier, &asset.path)
                    .await
            }
            Resource::AppSource(source) => self.provide_source(source.kind, &source.path).await,
        }
    }
}

/// Composes an app-source provider and a bundle-asset provider into a
/// single dispatching [`ResourceProvider`].
pub struct AnyResourceProvider {
    app: Arc<dyn AppResourceProvider>,
    bundle: Arc<dyn BundleResourceProvider>,
}

impl AnyResourceProvider {
    pub fn new(app: Arc<dyn AppResourceProvider>, bundle: Arc<dyn BundleResourceProvider>) -> Self {
        Self { app, bundle }
    }
}

#[async_trait]
impl BundleResourceProvider for AnyResourceProvider {
    async fn provide_asset(
        &self,
        kind: BundleAssetKind,
        bundle_identifier: &str,
        path: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        self.bundle.provide_asset(kind, bundle_identifier, path).await
    }
}

#[async_trait]
impl AppResourceProvider for AnyResourceProvider {
    async fn provide_source(
        &self,
        kind: AppSourceKind,
        path: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        self.app.provide_source(kind, path).await
    }
}

impl ResourceProvider for AnyResourceProvider {}
