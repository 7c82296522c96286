//! In-memory source backed by an explicit catalog.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::assets::AssetCatalog;
use crate::source::{NoteSource, SourceError};

/// Source holding an explicit catalog of `(path, content)` pairs.
///
/// This is the production backend for hosts where a build step materializes
/// the whole collection up front, and the simplest backend for tests. The
/// catalog is immutable after construction.
///
/// # Example
///
/// ```
/// use dn_source::{AssetCatalog, MemorySource, NoteSource};
///
/// let source = MemorySource::new()
///     .with_note("pages/guide.md", "# Guide")
///     .with_assets(AssetCatalog::new().with_asset("logo.svg", "/assets/logo.svg"));
///
/// assert_eq!(source.scan(), vec!["pages/guide.md".to_owned()]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySource {
    paths: Vec<String>,
    contents: HashMap<String, String>,
    assets: AssetCatalog,
}

impl MemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note with its content.
    #[must_use]
    pub fn with_note(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        let path = path.into();
        self.paths.push(path.clone());
        self.contents.insert(path, content.into());
        self
    }

    /// Attach an asset catalog.
    #[must_use]
    pub fn with_assets(mut self, assets: AssetCatalog) -> Self {
        self.assets = assets;
        self
    }
}

#[async_trait]
impl NoteSource for MemorySource {
    fn scan(&self) -> Vec<String> {
        self.paths.clone()
    }

    async fn fetch(&self, path: &str) -> Result<String, SourceError> {
        self.contents
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.to_owned()))
    }

    fn assets(&self) -> AssetCatalog {
        self.assets.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_fetch_known_note() {
        let source = MemorySource::new().with_note("pages/guide.md", "# Guide");

        let content = source.fetch("pages/guide.md").await.unwrap();
        assert_eq!(content, "# Guide");
    }

    #[tokio::test]
    async fn test_fetch_unknown_note_is_not_found() {
        let source = MemorySource::new();

        let err = source.fetch("pages/missing.md").await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[test]
    fn test_scan_preserves_insertion_order() {
        let source = MemorySource::new()
            .with_note("pages/b.md", "b")
            .with_note("pages/a.md", "a");

        assert_eq!(
            source.scan(),
            vec!["pages/b.md".to_owned(), "pages/a.md".to_owned()]
        );
    }

    #[test]
    fn test_assets_round_trip() {
        let source = MemorySource::new()
            .with_assets(AssetCatalog::new().with_asset("img/a.png", "/assets/a.png"));

        let assets = source.assets();
        assert_eq!(assets.resolve("note.md", "img/a.png"), Some("/assets/a.png"));
    }
}
