//! Resources fetched from a remote documentation server.

use async_trait::async_trait;
use docviewer_common::ProviderError;
use docviewer_core::{
    AppResourceProvider, AppSourceKind, BundleAssetKind, BundleResourceProvider, ResourceProvider,
};
use url::Url;

/// Fetches resource bytes over HTTP from a base URI.
///
/// Request paths are appended to the base as-is, so a base of
/// `https://docs.example.com/` and a resource path of
/// `/data/documentation/mylib.json` fetch
/// `https://docs.example.com/data/documentation/mylib.json`.
pub struct RemoteResourceProvider {
    client: reqwest::Client,
    base: Url,
}

impl RemoteResourceProvider {
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    pub fn with_client(base: Url, client: reqwest::Client) -> Self {
        Self { client, base }
    }

    /// The URL a resource path resolves against the base.
    fn request_url(&self, path: &str) -> Result<Url, ProviderError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|err| ProviderError::Network(err.to_string()))
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ProviderError> {
        let url = self.request_url(path)?;
        tracing::debug!(url = %url, "fetching remote resource");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| ProviderError::Network(err.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound);
        }

        let response = response
            .error_for_status()
            .map_err(|err| ProviderError::Network(err.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ProviderError::Network(err.to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl BundleResourceProvider for RemoteResourceProvider {
    async fn provide_asset(
        &self,
        _kind: BundleAssetKind,
        _bundle_identifier: &str,
        path: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        self.fetch(path).await
    }
}

#[async_trait]
impl AppResourceProvider for RemoteResourceProvider {
    async fn provide_source(
        &self,
        _kind: AppSourceKind,
        path: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        self.fetch(path).await
    }
}

impl ResourceProvider for RemoteResourceProvider {}
