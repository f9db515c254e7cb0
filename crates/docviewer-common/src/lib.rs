pub mod errors;

pub use errors::{BridgeError, DocViewerError, ProviderError};

pub type Result<T> = std::result::Result<T, DocViewerError>;
