//! Concrete resource providers for the documentation viewer.
//!
//! - [`AppSourceBundle`]: packaged renderer sources on disk, with the
//!   SPA-shell special case for documentation and tutorial pages
//! - [`RemoteResourceProvider`]: bundle data fetched from a remote server

pub mod app_source;
pub mod remote;

pub use app_source::AppSourceBundle;
pub use remote::RemoteResourceProvider;
