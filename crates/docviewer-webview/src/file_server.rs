//! Alternate serving mode: plain file serving under a base URL.
//!
//! Used when the renderer is hosted off a conventional file tree instead
//! of the resource taxonomy. Requests for actual files get their bytes;
//! extension-less topic paths get the SPA shell `index.html` so the
//! client-side router can take over.

use std::sync::Arc;

use async_trait::async_trait;
use docviewer_common::ProviderError;
use docviewer_core::mime;
use url::Url;

use crate::scheme::SchemeResponse;

/// Supplies bytes for an absolute URL within the served tree.
#[async_trait]
pub trait FileSource: Send + Sync {
    async fn data_for(&self, url: &Url) -> Result<Vec<u8>, ProviderError>;
}

/// Serves a file tree rooted at a base URL.
pub struct FileServer {
    base: Url,
    source: Arc<dyn FileSource>,
}

impl FileServer {
    pub fn new(base: Url, source: Arc<dyn FileSource>) -> Self {
        Self { base, source }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Build the response for one request.
    ///
    /// `None` stands for a request whose URL could not be parsed at the
    /// transport boundary.
    pub async fn response_for(&self, request_url: Option<&Url>) -> SchemeResponse {
        let Some(url) = request_url else {
            tracing::warn!("file server request without a URL");
            return SchemeResponse::error(400, None);
        };

        if !url.as_str().starts_with(self.base.as_str()) {
            tracing::warn!(url = %url, base = %self.base, "request outside served base");
            return SchemeResponse::error(403, None);
        }

        let ext = mime::extension_of(url.path());
        if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            match self.source.data_for(url).await {
                Ok(data) => {
                    let mime_type =
                        mime::mime_for_extension(ext).unwrap_or("application/octet-stream");
                    SchemeResponse::ok(mime_type, data)
                }
                Err(err) => {
                    tracing::warn!(url = %url, error = %err, "file not served");
                    SchemeResponse::error(404, Some(&err.to_string()))
                }
            }
        } else {
            // Topic path: fall back to the SPA shell.
            let index_url = match self.base.join("index.html") {
                Ok(index_url) => index_url,
                Err(err) => return SchemeResponse::error(404, Some(&err.to_string())),
            };

            match self.source.data_for(&index_url).await {
                Ok(data) => SchemeResponse::ok("text/html", data),
                Err(err) => {
                    tracing::warn!(url = %url, error = %err, "index fallback not served");
                    SchemeResponse::error(404, Some(&err.to_string()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TreeSource;

    #[async_trait]
    impl FileSource for TreeSource {
        async fn data_for(&self, url: &Url) -> Result<Vec<u8>, ProviderError> {
            match url.path() {
                "/docs/index.html" => Ok(b"<html>shell</html>".to_vec()),
                "/docs/js/app.js" => Ok(b"app".to_vec()),
                "/docs/data/blob.xyz123" => Ok(b"blob".to_vec()),
                _ => Err(ProviderError::NotFound),
            }
        }
    }

    fn server() -> FileServer {
        FileServer::new(
            Url::parse("https://example.com/docs/").unwrap(),
            Arc::new(TreeSource),
        )
    }

    fn url(input: &str) -> Url {
        Url::parse(input).unwrap()
    }

    #[tokio::test]
    async fn missing_url_is_400() {
        let response = server().response_for(None).await;
        assert_eq!(response.status, 400);
        assert_eq!(response.header(crate::scheme::PROVIDER_ERROR_HEADER), Some("-"));
    }

    #[tokio::test]
    async fn url_outside_base_is_403() {
        let response = server()
            .response_for(Some(&url("https://example.com/other/file.js")))
            .await;
        assert_eq!(response.status, 403);
    }

    #[tokio::test]
    async fn file_request_serves_bytes_with_mime() {
        let response = server()
            .response_for(Some(&url("https://example.com/docs/js/app.js")))
            .await;
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type(), Some("application/javascript"));
        assert_eq!(response.body, b"app");
    }

    #[tokio::test]
    async fn unknown_extension_defaults_to_octet_stream() {
        let response = server()
            .response_for(Some(&url("https://example.com/docs/data/blob.xyz123")))
            .await;
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type(), Some("application/octet-stream"));
    }

    #[tokio::test]
    async fn topic_path_falls_back_to_index() {
        let response = server()
            .response_for(Some(&url("https://example.com/docs/documentation/MyLib/MyType")))
            .await;
        assert_eq!(response.status, 200);
        assert_eq!(response.content_type(), Some("text/html"));
        assert_eq!(response.body, b"<html>shell</html>");
    }

    #[tokio::test]
    async fn missing_file_is_404_with_cause() {
        let response = server()
            .response_for(Some(&url("https://example.com/docs/js/missing.js")))
            .await;
        assert_eq!(response.status, 404);
        assert_eq!(
            response.header(crate::scheme::PROVIDER_ERROR_HEADER),
            Some("resource not found")
        );
    }
}
