//! MIME type lookup by file extension.

/// Best-guess MIME type for a file extension (without the leading dot).
///
/// Returns `None` for unknown extensions; callers pick their own default
/// (the scheme handler falls back to `text/html`, the file server to
/// `application/octet-stream`).
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_ascii_lowercase().as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "application/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "txt" => "text/plain",
        "xml" => "application/xml",
        "zip" => "application/zip",
        _ => return None,
    };
    Some(mime)
}

/// Extract the extension from a URL path. Empty when the last segment has
/// no dot or the dot is leading.
pub fn extension_of(path: &str) -> &str {
    let last_segment = path.rsplit('/').next().unwrap_or(path);
    match last_segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(mime_for_extension("html"), Some("text/html"));
        assert_eq!(mime_for_extension("css"), Some("text/css"));
        assert_eq!(mime_for_extension("js"), Some("application/javascript"));
        assert_eq!(mime_for_extension("json"), Some("application/json"));
        assert_eq!(mime_for_extension("svg"), Some("image/svg+xml"));
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(mime_for_extension("PNG"), Some("image/png"));
        assert_eq!(mime_for_extension("Json"), Some("application/json"));
    }

    #[test]
    fn unknown_extension_is_none() {
        assert_eq!(mime_for_extension("doccarchive"), None);
        assert_eq!(mime_for_extension(""), None);
    }

    #[test]
    fn extension_of_paths() {
        assert_eq!(extension_of("/js/chunk.js"), "js");
        assert_eq!(extension_of("/data/documentation/mylib.json"), "json");
        assert_eq!(extension_of("/documentation/MyLib/MyType"), "");
        assert_eq!(extension_of("/images/.hidden"), "");
        assert_eq!(extension_of(""), "");
    }
}
