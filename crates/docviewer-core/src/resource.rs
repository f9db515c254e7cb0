//! Resource classification for `doc://` scheme requests.
//!
//! Every request URL is mapped to either a bundle-scoped asset (symbol
//! data, images, downloads, ...) or a static source file of the embedded
//! renderer app (its JS/CSS/image payload). The mapping is driven entirely
//! by the first path segment, so it stays a pure lookup with no I/O.

use url::Url;

/// A resource addressed by a documentation scheme URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// An asset belonging to a specific documentation bundle.
    BundleAsset(BundleAsset),
    /// A static source file of the renderer app itself.
    AppSource(AppSource),
}

/// An asset scoped to one documentation bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleAsset {
    /// Reverse-DNS identifier of the bundle this asset belongs to.
    pub bundle_identifier: String,
    /// What kind of asset this is.
    pub kind: BundleAssetKind,
    /// Full request path, including the kind segment.
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleAssetKind {
    Download,
    Image,
    Index,
    Data,
    Documentation,
    Tutorial,
    ThemeSettings,
}

impl BundleAssetKind {
    /// Whether this kind addresses a whole navigable document rather than
    /// a supporting asset.
    pub fn is_document(&self) -> bool {
        matches!(self, BundleAssetKind::Download | BundleAssetKind::Tutorial)
    }
}

/// A static source file of the embedded renderer app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSource {
    pub kind: AppSourceKind,
    /// Full request path, including the kind segment.
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppSourceKind {
    Js,
    Css,
    Img,
    Index,
}

impl Resource {
    /// Classify a request URL.
    ///
    /// The URL host names the bundle; the first non-empty path segment
    /// selects the resource kind. Returns `None` for URLs without a host
    /// and for unrecognized segments. Never panics on malformed input.
    pub fn resolve(url: &Url) -> Option<Resource> {
        let bundle_id = url.host_str().filter(|host| !host.is_empty())?;

        let first_segment = url
            .path_segments()
            .and_then(|mut segments| segments.find(|segment| !segment.is_empty()))?;

        let path = url.path().to_string();

        let resource = match first_segment {
            "downloads" => Self::bundle_asset(bundle_id, BundleAssetKind::Download, path),
            "images" => Self::bundle_asset(bundle_id, BundleAssetKind::Image, path),
            "index" => Self::bundle_asset(bundle_id, BundleAssetKind::Index, path),
            "documentation" => Self::bundle_asset(bundle_id, BundleAssetKind::Documentation, path),
            "tutorial" => Self::bundle_asset(bundle_id, BundleAssetKind::Tutorial, path),
            "data" => Self::bundle_asset(bundle_id, BundleAssetKind::Data, path),
            "theme-settings.json" => {
                Self::bundle_asset(bundle_id, BundleAssetKind::ThemeSettings, path)
            }
            "js" => Resource::AppSource(AppSource {
                kind: AppSourceKind::Js,
                path,
            }),
            "css" => Resource::AppSource(AppSource {
                kind: AppSourceKind::Css,
                path,
            }),
            "img" => Resource::AppSource(AppSource {
                kind: AppSourceKind::Img,
                path,
            }),
            _ => return None,
        };

        Some(resource)
    }

    fn bundle_asset(bundle_id: &str, kind: BundleAssetKind, path: String) -> Resource {
        Resource::BundleAsset(BundleAsset {
            bundle_identifier: bundle_id.to_string(),
            kind,
            path,
        })
    }

    /// The theme-settings asset gets an override response path in the
    /// scheme handler, so it is worth a direct check.
    pub fn is_theme_settings(&self) -> bool {
        matches!(
            self,
            Resource::BundleAsset(BundleAsset {
                kind: BundleAssetKind::ThemeSettings,
                ..
            })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(input: &str) -> Option<Resource> {
        Resource::resolve(&Url::parse(input).unwrap())
    }

    // -- Bundle assets --

    #[test]
    fn resolves_all_bundle_asset_segments() {
        let cases = [
            ("downloads", BundleAssetKind::Download),
            ("images", BundleAssetKind::Image),
            ("index", BundleAssetKind::Index),
            ("documentation", BundleAssetKind::Documentation),
            ("tutorial", BundleAssetKind::Tutorial),
            ("data", BundleAssetKind::Data),
        ];

        for (segment, expected_kind) in cases {
            let url = format!("doc://com.example.MyLib/{segment}/some/path");
            match resolve(&url) {
                Some(Resource::BundleAsset(asset)) => {
                    assert_eq!(asset.kind, expected_kind, "segment {segment}");
                    assert_eq!(asset.bundle_identifier, "com.example.MyLib");
                    assert_eq!(asset.path, format!("/{segment}/some/path"));
                }
                other => panic!("segment {segment} resolved to {other:?}"),
            }
        }
    }

    #[test]
    fn resolves_theme_settings() {
        let resource = resolve("doc://com.example.MyLib/theme-settings.json").unwrap();
        assert!(resource.is_theme_settings());
    }

    #[test]
    fn documentation_path_keeps_kind_segment() {
        let resource = resolve("doc://com.example.MyLib/documentation/MyLib/MyType").unwrap();
        match resource {
            Resource::BundleAsset(asset) => {
                assert_eq!(asset.path, "/documentation/MyLib/MyType");
            }
            other => panic!("unexpected resource {other:?}"),
        }
    }

    // -- App sources --

    #[test]
    fn resolves_app_source_segments_as_distinct_kinds() {
        let cases = [
            ("js", AppSourceKind::Js),
            ("css", AppSourceKind::Css),
            ("img", AppSourceKind::Img),
        ];

        for (segment, expected_kind) in cases {
            let url = format!("doc://host/{segment}/chunk.bin");
            match resolve(&url) {
                Some(Resource::AppSource(source)) => {
                    assert_eq!(source.kind, expected_kind, "segment {segment}");
                    assert_eq!(source.path, format!("/{segment}/chunk.bin"));
                }
                other => panic!("segment {segment} resolved to {other:?}"),
            }
        }
    }

    // -- Unresolvable inputs --

    #[test]
    fn missing_host_is_unresolvable() {
        assert!(resolve("doc:///documentation/MyLib").is_none());
        assert!(resolve("doc:/documentation/MyLib").is_none());
    }

    #[test]
    fn unknown_segment_is_unresolvable() {
        assert!(resolve("doc://com.example.MyLib/unknown-segment/x").is_none());
        assert!(resolve("doc://com.example.MyLib/favicon.ico").is_none());
    }

    #[test]
    fn empty_path_is_unresolvable() {
        assert!(resolve("doc://com.example.MyLib").is_none());
        assert!(resolve("doc://com.example.MyLib/").is_none());
    }

    #[test]
    fn leading_empty_segments_are_skipped() {
        let resource = resolve("doc://com.example.MyLib//documentation/MyLib").unwrap();
        assert!(matches!(
            resource,
            Resource::BundleAsset(BundleAsset {
                kind: BundleAssetKind::Documentation,
                ..
            })
        ));
    }

    // -- Kind helpers --

    #[test]
    fn document_kinds() {
        assert!(BundleAssetKind::Download.is_document());
        assert!(BundleAssetKind::Tutorial.is_document());
        assert!(!BundleAssetKind::Documentation.is_document());
        assert!(!BundleAssetKind::Image.is_document());
    }
}
