//! Note catalog, navigation tree and content cache for the daily-notes engine.
//!
//! This crate owns the process-scoped state of a note collection:
//! - [`NoteRepository`]: descriptors, route index and lazily-filled content
//!   cache over an injected [`NoteSource`](dn_source::NoteSource)
//! - [`TreeNode`]: the folder/file navigation tree derived from shared path
//!   prefixes
//! - [`Collate`]: the explicit collation strategy behind catalog and sibling
//!   ordering
//! - [`Session`]: last-visited route and theme over an injected key-value
//!   surface
//!
//! The repository is built once at startup and frozen apart from its content
//! cache; hosts share it behind an `Arc`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use dn_notes::{NoteRepository, RepositoryConfig, default_collation};
//! use dn_source::{MemorySource, NoteSource};
//!
//! # async fn example() -> Result<(), dn_notes::CatalogError> {
//! let source = Arc::new(
//!     MemorySource::new().with_note("pages/rust/ownership.md", "# Ownership"),
//! );
//!
//! let repo = NoteRepository::new(
//!     source as Arc<dyn NoteSource>,
//!     &RepositoryConfig::default(),
//!     default_collation().as_ref(),
//! )?;
//!
//! assert!(repo.is_valid_route("/notes/rust/ownership"));
//! let note = repo.load("/notes/rust/ownership").await.unwrap();
//! assert_eq!(note.content, "# Ownership");
//! # Ok(())
//! # }
//! ```

mod collate;
mod descriptor;
mod repository;
mod session;
mod tree;

pub use collate::{BinaryCollation, Collate, LocaleCollation, default_collation};
pub use descriptor::{NoteDescriptor, RepositoryConfig, route_segments};
pub use repository::{CatalogError, LoadedNote, NoteRepository};
pub use session::{
    KeyValueStore, MemoryStore, NullStore, ROUTE_STORAGE_KEY, Session, THEME_STORAGE_KEY,
    ThemeMode,
};
pub use tree::{NodeKind, TreeNode};
