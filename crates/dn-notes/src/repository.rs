//! Note repository: catalog, route index and content cache.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use dn_source::NoteSource;

use crate::collate::Collate;
use crate::descriptor::{NoteDescriptor, RepositoryConfig};
use crate::tree::{TreeNode, build_tree};

/// Error raised when a catalog violates its structural invariants.
///
/// These are construction-time failures: a malformed catalog is rejected
/// before the repository starts serving, instead of producing a navigation
/// tree that silently drops notes.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two source paths normalized to the same id.
    #[error("duplicate note id: {0}")]
    DuplicateId(String),
    /// One note's path is a strict prefix of another's, so the same tree id
    /// would have to be both a folder and a file.
    #[error("path conflict: `{id}` would be both a folder and a file")]
    PathConflict {
        /// The contested path prefix.
        id: String,
    },
}

/// A note descriptor together with its fetched content.
///
/// Created on first successful load and cached for the process lifetime;
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedNote {
    /// The note's catalog entry.
    pub descriptor: NoteDescriptor,
    /// Raw markdown source (empty when the source yielded nothing).
    pub content: String,
}

/// Process-scoped note catalog with lazy, cached content loading.
///
/// Built once at startup from the paths a [`NoteSource`] reports. The
/// catalog, navigation tree and route index are frozen at construction and
/// never recomputed; only the content cache grows, written exclusively by
/// [`load`](NoteRepository::load). All state is owned by the instance, so
/// hosts share the repository behind an `Arc` instead of ambient globals.
pub struct NoteRepository {
    source: Arc<dyn NoteSource>,
    descriptors: Vec<NoteDescriptor>,
    /// Source paths parallel to `descriptors` (the source keys fetches by
    /// its own raw paths, extension included).
    source_paths: Vec<String>,
    tree: Vec<TreeNode>,
    route_index: HashMap<String, usize>,
    /// Content cache keyed by descriptor path. Append-only.
    cache: RwLock<HashMap<String, String>>,
}

impl std::fmt::Debug for NoteRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteRepository")
            .field("descriptors", &self.descriptors)
            .field("source_paths", &self.source_paths)
            .field("tree", &self.tree)
            .field("route_index", &self.route_index)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl NoteRepository {
    /// Build a repository from a source.
    ///
    /// Scans the source once, derives descriptors (skipping paths that yield
    /// no segments), orders the catalog by path under `collation` and builds
    /// the navigation tree.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when two paths collapse to one id or one
    /// path prefixes another.
    pub fn new(
        source: Arc<dyn NoteSource>,
        config: &RepositoryConfig,
        collation: &dyn Collate,
    ) -> Result<Self, CatalogError> {
        let mut entries: Vec<(NoteDescriptor, String)> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for raw in source.scan() {
            let Some(descriptor) = NoteDescriptor::from_source_path(&raw, config) else {
                tracing::warn!(path = %raw, "skipping source path with no usable segments");
                continue;
            };
            if !seen.insert(descriptor.id.clone()) {
                return Err(CatalogError::DuplicateId(descriptor.id));
            }
            entries.push((descriptor, raw));
        }

        entries.sort_by(|(a, _), (b, _)| collation.compare(&a.path, &b.path));

        let (descriptors, source_paths): (Vec<_>, Vec<_>) = entries.into_iter().unzip();
        let tree = build_tree(&descriptors, collation)?;
        let route_index = descriptors
            .iter()
            .enumerate()
            .map(|(i, d)| (d.route_path.clone(), i))
            .collect();

        Ok(Self {
            source,
            descriptors,
            source_paths,
            tree,
            route_index,
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// All descriptors, ordered by path under the construction collation.
    #[must_use]
    pub fn catalog(&self) -> &[NoteDescriptor] {
        &self.descriptors
    }

    /// The navigation tree over the catalog.
    #[must_use]
    pub fn tree(&self) -> &[TreeNode] {
        &self.tree
    }

    /// Whether `route` addresses a note in the catalog.
    #[must_use]
    pub fn is_valid_route(&self, route: &str) -> bool {
        self.route_index.contains_key(route)
    }

    /// Load the note addressed by `route`.
    ///
    /// Returns `None` for unknown routes without consulting the source.
    /// Otherwise the content cache is checked first; on a miss the source is
    /// fetched and the result stored. A fetch failure degrades to empty
    /// content (with a logged warning); `load` never errors. The first
    /// insert for a path wins; the cached value is immutable afterwards, so
    /// repeated loads return identical content.
    ///
    /// # Panics
    ///
    /// Panics if the internal cache lock is poisoned.
    pub async fn load(&self, route: &str) -> Option<LoadedNote> {
        let idx = *self.route_index.get(route)?;
        let descriptor = &self.descriptors[idx];

        if let Some(content) = self.cache.read().unwrap().get(&descriptor.path) {
            return Some(LoadedNote {
                descriptor: descriptor.clone(),
                content: content.clone(),
            });
        }

        let fetched = match self.source.fetch(&self.source_paths[idx]).await {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(path = %descriptor.path, %error, "fetch failed, caching empty content");
                String::new()
            }
        };

        let mut cache = self.cache.write().unwrap();
        let content = cache
            .entry(descriptor.path.clone())
            .or_insert(fetched)
            .clone();

        Some(LoadedNote {
            descriptor: descriptor.clone(),
            content,
        })
    }
}
