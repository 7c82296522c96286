//! Mock source implementation for testing.
//!
//! Provides [`MockSource`] for unit tests that need to observe fetch traffic
//! or inject failures.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::assets::AssetCatalog;
use crate::source::{NoteSource, SourceError};

/// Mock source for testing.
///
/// Behaves like [`MemorySource`](crate::MemorySource) but records every fetch
/// and can be told to fail for specific paths.
///
/// # Example
///
/// ```ignore
/// let source = MockSource::new().with_note("pages/a.md", "# A");
///
/// source.fetch("pages/a.md").await.unwrap();
/// assert_eq!(source.fetch_count("pages/a.md"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    paths: Vec<String>,
    contents: HashMap<String, String>,
    failures: HashSet<String>,
    assets: AssetCatalog,
    fetches: RwLock<HashMap<String, usize>>,
}

impl MockSource {
    /// Create an empty mock source.
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

    /// Add a note whose fetch always fails with [`SourceError::Unavailable`].
    #[must_use]
    pub fn with_failing_note(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.paths.push(path.clone());
        self.failures.insert(path);
        self
    }

    /// Attach an asset catalog.
    #[must_use]
    pub fn with_assets(mut self, assets: AssetCatalog) -> Self {
        self.assets = assets;
        self
    }

    /// Number of fetches issued for one path.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn fetch_count(&self, path: &str) -> usize {
        self.fetches.read().unwrap().get(path).copied().unwrap_or(0)
    }

    /// Total number of fetches issued across all paths.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn total_fetches(&self) -> usize {
        self.fetches.read().unwrap().values().sum()
    }
}

#[async_trait]
impl NoteSource for MockSource {
    fn scan(&self) -> Vec<String> {
        self.paths.clone()
    }

    async fn fetch(&self, path: &str) -> Result<String, SourceError> {
        *self
            .fetches
            .write()
            .unwrap()
            .entry(path.to_owned())
            .or_insert(0) += 1;

        if self.failures.contains(path) {
            return Err(SourceError::Unavailable(path.to_owned()));
        }

        self.contents
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(path.to_owned()))
    }

    fn assets(&self) -> AssetCatalog {
        self.assets.clone()
    }
}
