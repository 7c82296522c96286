//! Eager asset lookup table.

use std::collections::HashMap;

use crate::resolve::resolve_relative;

/// Fully-materialized map from normalized asset path to asset locator.
///
/// Built once by the document source (the supplier already knows every asset
/// it bundles). Keys are POSIX-style relative paths without a leading slash;
/// values are whatever locator the host environment hands out for the asset
/// (a URL, a data URI, an object key).
///
/// Lookups go through [`resolve`](AssetCatalog::resolve), which resolves a
/// note-relative reference first. A miss is a miss, never an error.
#[derive(Clone, Debug, Default)]
pub struct AssetCatalog {
    entries: HashMap<String, String>,
}

impl AssetCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset. Leading slashes are stripped from the key.
    pub fn insert(&mut self, path: impl Into<String>, locator: impl Into<String>) {
        let path = path.into();
        let normalized = path.trim_start_matches('/').to_owned();
        self.entries.insert(normalized, locator.into());
    }

    /// Builder-style [`insert`](AssetCatalog::insert).
    #[must_use]
    pub fn with_asset(mut self, path: impl Into<String>, locator: impl Into<String>) -> Self {
        self.insert(path, locator);
        self
    }

    /// Resolve a reference found in `note_path` against the catalog.
    ///
    /// Returns the locator for the referenced asset, or `None` when the
    /// reference can't be resolved or nothing is registered under the
    /// resolved key.
    #[must_use]
    pub fn resolve(&self, note_path: &str, reference: &str) -> Option<&str> {
        let key = resolve_relative(note_path, reference)?;
        self.entries.get(&key).map(String::as_str)
    }

    /// Number of registered assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no assets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_resolve_relative_reference() {
        let catalog = AssetCatalog::new()
            .with_asset("rust/img/borrow.png", "/assets/borrow.abc123.png");

        assert_eq!(
            catalog.resolve("rust/ownership.md", "./img/borrow.png"),
            Some("/assets/borrow.abc123.png")
        );
    }

    #[test]
    fn test_resolve_parent_reference() {
        let catalog = AssetCatalog::new().with_asset("shared/logo.svg", "/assets/logo.svg");

        assert_eq!(
            catalog.resolve("rust/ownership.md", "../shared/logo.svg"),
            Some("/assets/logo.svg")
        );
    }

    #[test]
    fn test_miss_is_none() {
        let catalog = AssetCatalog::new().with_asset("a/b.png", "/assets/b.png");

        assert_eq!(catalog.resolve("a/note.md", "./missing.png"), None);
        assert_eq!(catalog.resolve("", "b.png"), None);
    }

    #[test]
    fn test_leading_slash_stripped_on_insert() {
        let catalog = AssetCatalog::new().with_asset("/a/b.png", "/assets/b.png");

        assert_eq!(catalog.resolve("a/note.md", "b.png"), Some("/assets/b.png"));
    }

    #[test]
    fn test_len_and_is_empty() {
        let catalog = AssetCatalog::new();
        assert!(catalog.is_empty());

        let catalog = catalog.with_asset("a.png", "/a");
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }
}
