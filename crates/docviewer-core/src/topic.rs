//! Topic addressing.

use std::fmt;

use url::Url;

/// A single navigable documentation page: a bundle plus an in-bundle path.
///
/// Compared by value; the navigation controller uses equality to coalesce
/// redundant navigations and the bundle identifier to decide between a
/// full page load and an in-place client-side route change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicUrl {
    pub bundle_identifier: String,
    pub path: String,
}

impl TopicUrl {
    pub fn new(bundle_identifier: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            bundle_identifier: bundle_identifier.into(),
            path: path.into(),
        }
    }

    /// Render as a scheme URL, `doc://<bundleIdentifier><path>`.
    pub fn url(&self) -> Option<Url> {
        Url::parse(&format!("doc://{}{}", self.bundle_identifier, self.path)).ok()
    }

    /// Parse a scheme URL into a topic.
    ///
    /// Accepts both the host form (`doc://<bundle>/<path>`) and the
    /// host-less form where the bundle identifier is the first path
    /// segment.
    pub fn from_url(url: &Url) -> Option<TopicUrl> {
        if let Some(host) = url.host_str().filter(|host| !host.is_empty()) {
            return Some(TopicUrl::new(host, url.path()));
        }

        let mut segments = url.path_segments()?.skip_while(|segment| segment.is_empty());
        let bundle = segments.next().filter(|segment| !segment.is_empty())?;

        let rest: Vec<&str> = segments.collect();
        let path = if rest.is_empty() {
            String::from("/")
        } else {
            format!("/{}", rest.join("/"))
        };

        Some(TopicUrl::new(bundle, path))
    }
}

impl fmt::Display for TopicUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc://{}{}", self.bundle_identifier, self.path)
    }
}
