//! Note descriptors and route derivation.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Characters escaped when encoding a route segment.
///
/// Mirrors `encodeURIComponent`: everything except ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )`, so routes round-trip exactly against the segments
/// they were built from.
const ROUTE_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Configuration for catalog construction.
#[derive(Clone, Debug)]
pub struct RepositoryConfig {
    /// Prefix stripped from source paths before segmentation (e.g. `pages/`).
    pub source_root: String,
    /// Fixed prefix under which routes are addressed (e.g. `/notes`).
    pub route_prefix: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            source_root: "pages/".to_owned(),
            route_prefix: "/notes".to_owned(),
        }
    }
}

/// Metadata identifying one note, without its content.
///
/// `id` and `path` are unique across a catalog; `route_path` is a
/// deterministic, injective function of `segments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDescriptor {
    /// Unique id, equal to the normalized relative path.
    pub id: String,
    /// Normalized relative path: POSIX separators, no leading slash,
    /// extension stripped from the final component.
    pub path: String,
    /// Externally addressable route (`{prefix}/{encoded segments}`).
    pub route_path: String,
    /// Ordered path components: directories, then filename without extension.
    pub segments: Vec<String>,
    /// Last element of `segments`.
    pub filename: String,
    /// Display title; defaults to `filename`.
    pub title: String,
}

impl NoteDescriptor {
    /// Derive a descriptor from a source path.
    ///
    /// Strips the configured source root, splits into segments, drops the
    /// markdown extension from the final component and builds the route.
    /// Returns `None` when the path yields no segments.
    pub(crate) fn from_source_path(raw: &str, config: &RepositoryConfig) -> Option<Self> {
        let relative = raw.strip_prefix(&config.source_root).unwrap_or(raw);
        let segments = to_segments(relative);
        let filename = segments.last()?.clone();
        let path = segments.join("/");
        let route_path = build_route_path(&config.route_prefix, &segments);

        Some(Self {
            id: path.clone(),
            path,
            route_path,
            segments,
            filename: filename.clone(),
            title: filename,
        })
    }
}

/// Split a relative path into segments, dropping the markdown extension
/// from the final component and discarding empties.
fn to_segments(relative: &str) -> Vec<String> {
    let mut parts: Vec<&str> = relative.split('/').collect();
    let last = parts.pop().unwrap_or("");
    let stem = strip_md_extension(last);
    parts.push(stem);
    parts
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Strip a trailing `.md` (case-insensitive).
fn strip_md_extension(name: &str) -> &str {
    let len = name.len();
    if len >= 3 && name.is_char_boundary(len - 3) && name[len - 3..].eq_ignore_ascii_case(".md") {
        &name[..len - 3]
    } else {
        name
    }
}

/// Build the route for a segment sequence under the given prefix.
fn build_route_path(prefix: &str, segments: &[String]) -> String {
    let encoded: Vec<String> = segments
        .iter()
        .map(|s| utf8_percent_encode(s, ROUTE_SEGMENT).to_string())
        .collect();
    format!("{prefix}/{}", encoded.join("/"))
}

/// Decode a route back into its segments.
///
/// Inverse of route derivation: returns the decoded segments when `route`
/// sits under `prefix` and every segment decodes as UTF-8, `None` otherwise.
#[must_use]
pub fn route_segments(route: &str, prefix: &str) -> Option<Vec<String>> {
    let rest = route.strip_prefix(prefix)?.strip_prefix('/')?;
    rest.split('/')
        .map(|seg| {
            percent_decode_str(seg)
                .decode_utf8()
                .ok()
                .map(|s| s.into_owned())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn descriptor(raw: &str) -> NoteDescriptor {
        NoteDescriptor::from_source_path(raw, &RepositoryConfig::default()).unwrap()
    }

    #[test]
    fn test_derivation_strips_root_and_extension() {
        let desc = descriptor("pages/rust/ownership.md");

        assert_eq!(desc.id, "rust/ownership");
        assert_eq!(desc.path, "rust/ownership");
        assert_eq!(desc.segments, vec!["rust".to_owned(), "ownership".to_owned()]);
        assert_eq!(desc.filename, "ownership");
        assert_eq!(desc.title, "ownership");
        assert_eq!(desc.route_path, "/notes/rust/ownership");
    }

    #[test]
    fn test_derivation_without_root_prefix() {
        let desc = descriptor("scratch.md");
        assert_eq!(desc.path, "scratch");
        assert_eq!(desc.route_path, "/notes/scratch");
    }

    #[test]
    fn test_extension_stripping_is_case_insensitive() {
        assert_eq!(descriptor("pages/a.MD").path, "a");
        assert_eq!(descriptor("pages/a.Md").path, "a");
        // Only the final component loses its extension.
        assert_eq!(descriptor("pages/v1.0/readme.md").path, "v1.0/readme");
    }

    #[test]
    fn test_empty_path_yields_none() {
        let config = RepositoryConfig::default();
        assert!(NoteDescriptor::from_source_path("", &config).is_none());
        assert!(NoteDescriptor::from_source_path("pages/", &config).is_none());
    }

    #[test]
    fn test_route_encoding_of_non_ascii_segments() {
        let desc = descriptor("pages/日记/第一天.md");
        assert_eq!(
            desc.route_path,
            "/notes/%E6%97%A5%E8%AE%B0/%E7%AC%AC%E4%B8%80%E5%A4%A9"
        );
    }

    #[test]
    fn test_route_encoding_of_spaces_and_reserved_chars() {
        let desc = descriptor("pages/daily log/a+b.md");
        assert_eq!(desc.route_path, "/notes/daily%20log/a%2Bb");
    }

    #[test]
    fn test_route_round_trip() {
        for raw in [
            "pages/rust/ownership.md",
            "pages/日记/第一天.md",
            "pages/daily log/a+b.md",
            "pages/mixed/caf\u{e9} notes.md",
        ] {
            let desc = descriptor(raw);
            let decoded = route_segments(&desc.route_path, "/notes").unwrap();
            assert_eq!(decoded, desc.segments, "round trip failed for {raw}");
        }
    }

    #[test]
    fn test_route_segments_rejects_foreign_prefix() {
        assert_eq!(route_segments("/other/a", "/notes"), None);
        assert_eq!(route_segments("/notes", "/notes"), None);
    }
}
