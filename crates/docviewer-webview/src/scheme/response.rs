//! HTTP-shaped responses for the custom scheme.

/// Diagnostic header attached to failure responses.
pub const PROVIDER_ERROR_HEADER: &str = "X-Documentation-Provider-Error";

/// A response delivered back to the web-view transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl SchemeResponse {
    /// 200 with `Content-Type` and `Content-Length` set from the payload.
    pub fn ok(mime: &str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            headers: vec![
                ("Content-Type".to_string(), mime.to_string()),
                ("Content-Length".to_string(), body.len().to_string()),
            ],
            body,
        }
    }

    /// Bare 404 with an empty body, for URLs that are not resources.
    pub fn not_found() -> Self {
        Self {
            status: 404,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Failure response carrying the diagnostic header. A missing cause
    /// is encoded as `-`.
    pub fn error(status: u16, cause: Option<&str>) -> Self {
        Self {
            status,
            headers: vec![(
                PROVIDER_ERROR_HEADER.to_string(),
                cause.unwrap_or("-").to_string(),
            )],
            body: Vec::new(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }

    pub fn content_length(&self) -> Option<usize> {
        self.header("Content-Length")?.parse().ok()
    }
}
