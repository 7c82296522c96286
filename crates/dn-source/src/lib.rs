//! Document source abstraction for the daily-notes engine.
//!
//! This crate provides a [`NoteSource`] trait for abstracting note enumeration
//! and content retrieval from the underlying transport. This enables:
//!
//! - **Unit testing** without a build pipeline or filesystem
//! - **Backend flexibility** (in-memory catalogs, embedded bundles, HTTP)
//! - **Clean separation** between catalog logic and I/O
//!
//! Discovery is deliberately not part of this crate: a build step or
//! filesystem scan supplies the set of note paths, and [`MemorySource`] holds
//! the result as an explicit catalog of `(path, content)` pairs.
//!
//! The crate also owns the asset side of a note collection: a pure relative
//! path resolver ([`resolve_relative`]) and the eager [`AssetCatalog`] lookup
//! table it is keyed by.
//!
//! # Example
//!
//! ```
//! use dn_source::{MemorySource, NoteSource};
//!
//! # async fn example() {
//! let source = MemorySource::new()
//!     .with_note("pages/guide.md", "# Guide\n\nContent.");
//!
//! let paths = source.scan();
//! let content = source.fetch("pages/guide.md").await.unwrap();
//! # }
//! ```

mod assets;
mod memory;
#[cfg(feature = "mock")]
mod mock;
mod resolve;
mod source;

pub use assets::AssetCatalog;
pub use memory::MemorySource;
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use resolve::resolve_relative;
pub use source::{NoteSource, SourceError};
