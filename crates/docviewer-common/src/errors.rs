#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("resource not found")]
    NotFound,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ProviderError {
    /// Whether this failure means "no such resource" rather than a
    /// provider malfunction. Callers map the former to a bare 404 and the
    /// latter to a 404 with a diagnostic header.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("backend not attached")]
    BackendUnattached,

    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DocViewerError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display() {
        let err = ProviderError::NotFound;
        assert_eq!(err.to_string(), "resource not found");

        let err = ProviderError::Network("connection refused".into());
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[test]
    fn provider_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ProviderError = io_err.into();
        assert!(matches!(err, ProviderError::Io(_)));
        assert!(err.to_string().contains("file missing"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_classification() {
        assert!(ProviderError::NotFound.is_not_found());
        assert!(!ProviderError::Network("timeout".into()).is_not_found());
    }

    #[test]
    fn bridge_error_display() {
        let err = BridgeError::BackendUnattached;
        assert_eq!(err.to_string(), "backend not attached");

        let err = BridgeError::Backend("script evaluation failed".into());
        assert_eq!(err.to_string(), "backend error: script evaluation failed");
    }

    #[test]
    fn docviewer_error_from_provider() {
        let err: DocViewerError = ProviderError::NotFound.into();
        assert!(matches!(err, DocViewerError::Provider(_)));
        assert_eq!(err.to_string(), "resource not found");
    }

    #[test]
    fn docviewer_error_from_bridge() {
        let err: DocViewerError = BridgeError::BackendUnattached.into();
        assert!(matches!(err, DocViewerError::Bridge(_)));
        assert!(err.to_string().contains("backend not attached"));
    }
}
