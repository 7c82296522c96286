//! Source trait and error types.

use async_trait::async_trait;

use crate::assets::AssetCatalog;

/// Error returned by a [`NoteSource`] fetch.
///
/// Fetch failures are never fatal to a consumer: the repository layer
/// degrades them to empty content. The kinds exist so backends can report
/// what went wrong and so logs stay meaningful.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// No note exists at the given path.
    #[error("note not found: {0}")]
    NotFound(String),
    /// The backend could not be reached or failed mid-transfer.
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Source abstraction for note enumeration and content retrieval.
///
/// Paths are the backend's own identifiers (typically POSIX-style relative
/// paths including the markdown extension, e.g. `pages/rust/ownership.md`).
/// [`scan`](NoteSource::scan) and [`fetch`](NoteSource::fetch) agree on this
/// keying; consumers never invent paths.
///
/// Content retrieval is asynchronous: backends may lazily pull note bodies
/// over a network or from a bundle loader. Enumeration and the asset catalog
/// are eager and synchronous.
#[async_trait]
pub trait NoteSource: Send + Sync {
    /// Enumerate all note paths known to this source.
    ///
    /// The order is unspecified; consumers apply their own ordering.
    fn scan(&self) -> Vec<String>;

    /// Fetch the raw text of one note.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the note doesn't exist or can't be read.
    async fn fetch(&self, path: &str) -> Result<String, SourceError>;

    /// Eager map from normalized asset path to resolved asset locator.
    ///
    /// Sources that carry no assets use the default empty catalog.
    fn assets(&self) -> AssetCatalog {
        AssetCatalog::default()
    }
}
