//! Packaged renderer sources served from a resource root on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use docviewer_common::ProviderError;
use docviewer_core::{
    AppResourceProvider, AppSourceKind, BundleAssetKind, BundleResourceProvider, ResourceProvider,
};

/// Serves the renderer app's static sources from a directory and wraps an
/// inner provider for bundle-scoped assets.
///
/// `documentation` and `tutorial` asset requests always get the root
/// `index.html`: the renderer is a single-page app whose client-side
/// router takes over once the shell is loaded.
pub struct AppSourceBundle {
    resource_root: PathBuf,
    bundle_provider: Arc<dyn BundleResourceProvider>,
}

impl AppSourceBundle {
    pub fn new(
        resource_root: impl Into<PathBuf>,
        bundle_provider: Arc<dyn BundleResourceProvider>,
    ) -> Self {
        Self {
            resource_root: resource_root.into(),
            bundle_provider,
        }
    }

    pub fn resource_root(&self) -> &Path {
        &self.resource_root
    }

    /// Read a file under the resource root.
    ///
    /// Both the root and the target are canonicalized before the
    /// containment check so `..` segments and symlinks cannot escape the
    /// root.
    async fn resource_at(&self, path: &str) -> Result<Vec<u8>, ProviderError> {
        let clean = path.trim_start_matches('/');
        let candidate = self.resource_root.join(clean);

        let canonical_root = tokio::fs::canonicalize(&self.resource_root)
            .await
            .map_err(io_to_provider)?;
        let canonical_file = tokio::fs::canonicalize(&candidate)
            .await
            .map_err(io_to_provider)?;

        if !canonical_file.starts_with(&canonical_root) {
            tracing::warn!(path = %path, "app source request escapes resource root");
            return Err(ProviderError::NotFound);
        }

        tokio::fs::read(&canonical_file).await.map_err(io_to_provider)
    }
}

fn io_to_provider(err: std::io::Error) -> ProviderError {
    if err.kind() == std::io::ErrorKind::NotFound {
        ProviderError::NotFound
    } else {
        ProviderError::Io(err)
    }
}

#[async_trait]
impl BundleResourceProvider for AppSourceBundle {
    async fn provide_asset(
        &self,
        kind: BundleAssetKind,
        bundle_identifier: &str,
        path: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        match kind {
            BundleAssetKind::Documentation | BundleAssetKind::Tutorial => {
                self.resource_at("index.html").await
            }
            _ => {
                self.bundle_provider
                    .provide_asset(kind, bundle_identifier, path)
                    .await
            }
        }
    }
}

#[async_trait]
impl AppResourceProvider for AppSourceBundle {
    async fn provide_source(
        &self,
        _kind: AppSourceKind,
        path: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        self.resource_at(path).await
    }
}

impl ResourceProvider for AppSourceBundle {}
