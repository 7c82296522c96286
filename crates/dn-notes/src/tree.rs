//! Navigation tree construction.
//!
//! Descriptors are flat; the tree nests them by shared path prefix. Nodes are
//! built into a flat arena with child indices, then materialized and sorted
//! recursively, so sibling order is deterministic regardless of input order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::collate::Collate;
use crate::descriptor::NoteDescriptor;
use crate::repository::CatalogError;

/// Tree node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Internal node: a shared path prefix with descendants.
    Folder,
    /// Leaf node: one note.
    File,
}

/// One node of the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// The path prefix this node represents (joined segments up to and
    /// including itself).
    pub id: String,
    /// The single path segment this node contributes.
    pub label: String,
    /// Folder or file.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Route of the note; set only on files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Ordered children; non-empty only on folders.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

/// Arena entry used during construction.
struct Interim {
    id: String,
    label: String,
    kind: NodeKind,
    path: Option<String>,
    children: Vec<usize>,
}

/// Build the navigation tree for a catalog of descriptors.
///
/// Walks each descriptor's segments left to right, reusing the node already
/// created for a prefix and appending new nodes to their parent. The final
/// segment becomes a file carrying the descriptor's route; earlier segments
/// are folders.
///
/// # Errors
///
/// Returns [`CatalogError::PathConflict`] when one descriptor's path is a
/// strict prefix of another's (the same id would have to be both a folder
/// and a file). Such catalogs are rejected outright rather than letting the
/// later descriptor silently overwrite the earlier subtree.
pub(crate) fn build_tree(
    descriptors: &[NoteDescriptor],
    collation: &dyn Collate,
) -> Result<Vec<TreeNode>, CatalogError> {
    let mut arena: Vec<Interim> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut roots: Vec<usize> = Vec::new();

    for descriptor in descriptors {
        let mut parent: Option<usize> = None;
        let mut prefix = String::new();

        for (i, segment) in descriptor.segments.iter().enumerate() {
            let is_last = i == descriptor.segments.len() - 1;
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);

            let node = match index.get(&prefix) {
                Some(&existing) => {
                    // A file id can never double as a folder id (or the
                    // reverse); the catalog is malformed.
                    let conflict = if is_last {
                        true // the full path already exists as some node
                    } else {
                        arena[existing].kind == NodeKind::File
                    };
                    if conflict {
                        return Err(CatalogError::PathConflict { id: prefix });
                    }
                    existing
                }
                None => {
                    let node = arena.len();
                    arena.push(Interim {
                        id: prefix.clone(),
                        label: segment.clone(),
                        kind: if is_last { NodeKind::File } else { NodeKind::Folder },
                        path: is_last.then(|| descriptor.route_path.clone()),
                        children: Vec::new(),
                    });
                    index.insert(prefix.clone(), node);
                    match parent {
                        Some(p) => arena[p].children.push(node),
                        None => roots.push(node),
                    }
                    node
                }
            };

            parent = Some(node);
        }
    }

    let mut tree: Vec<TreeNode> = roots.iter().map(|&r| materialize(&arena, r)).collect();
    sort_nodes(&mut tree, collation);
    Ok(tree)
}

/// Turn an arena entry (and its subtree) into an owned node.
fn materialize(arena: &[Interim], idx: usize) -> TreeNode {
    let entry = &arena[idx];
    TreeNode {
        id: entry.id.clone(),
        label: entry.label.clone(),
        kind: entry.kind,
        path: entry.path.clone(),
        children: entry
            .children
            .iter()
            .map(|&child| materialize(arena, child))
            .collect(),
    }
}

/// Recursively sort sibling lists: folders first, then labels under the
/// collation strategy.
fn sort_nodes(nodes: &mut [TreeNode], collation: &dyn Collate) {
    nodes.sort_by(|a, b| {
        if a.kind == b.kind {
            collation.compare(&a.label, &b.label)
        } else if a.kind == NodeKind::Folder {
            std::cmp::Ordering::Less
        } else {
            std::cmp::Ordering::Greater
        }
    });

    for node in nodes {
        sort_nodes(&mut node.children, collation);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::collate::{BinaryCollation, LocaleCollation};
    use crate::descriptor::RepositoryConfig;

    use super::*;

    fn descriptors(paths: &[&str]) -> Vec<NoteDescriptor> {
        let config = RepositoryConfig::default();
        paths
            .iter()
            .map(|p| NoteDescriptor::from_source_path(p, &config).unwrap())
            .collect()
    }

    fn build(paths: &[&str]) -> Vec<TreeNode> {
        build_tree(&descriptors(paths), &BinaryCollation).unwrap()
    }

    #[test]
    fn test_shared_prefix_becomes_one_folder() {
        let tree = build(&["pages/a/b.md", "pages/a/c.md"]);

        assert_eq!(tree.len(), 1);
        let folder = &tree[0];
        assert_eq!(folder.id, "a");
        assert_eq!(folder.label, "a");
        assert_eq!(folder.kind, NodeKind::Folder);
        assert_eq!(folder.path, None);

        let labels: Vec<&str> = folder.children.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c"]);
        assert!(folder.children.iter().all(|n| n.kind == NodeKind::File));
    }

    #[test]
    fn test_file_node_carries_route() {
        let tree = build(&["pages/a/b.md"]);
        let file = &tree[0].children[0];

        assert_eq!(file.id, "a/b");
        assert_eq!(file.path.as_deref(), Some("/notes/a/b"));
        assert!(file.children.is_empty());
    }

    #[test]
    fn test_folders_sort_before_files_regardless_of_label() {
        // File "a" vs folder "z": folder wins the top slot.
        let tree = build(&["pages/a.md", "pages/z/inner.md"]);

        assert_eq!(tree[0].label, "z");
        assert_eq!(tree[0].kind, NodeKind::Folder);
        assert_eq!(tree[1].label, "a");
        assert_eq!(tree[1].kind, NodeKind::File);
    }

    #[test]
    fn test_deterministic_across_input_order() {
        let forward = build(&["pages/a/b.md", "pages/a/c.md", "pages/d.md"]);
        let reverse = build(&["pages/d.md", "pages/a/c.md", "pages/a/b.md"]);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_locale_sorted_siblings() {
        let collation = LocaleCollation::chinese().expect("bundled collation data");
        let tree = build_tree(
            &descriptors(&["pages/苹果.md", "pages/banana.md", "pages/安全.md"]),
            &collation,
        )
        .unwrap();

        let labels: Vec<&str> = tree.iter().map(|n| n.label.as_str()).collect();
        // zh tailoring: Latin first, then Han by pinyin (安 ān < 苹 píng).
        assert_eq!(labels, vec!["banana", "安全", "苹果"]);
    }

    #[test]
    fn test_file_shadowing_folder_is_rejected() {
        let err = build_tree(
            &descriptors(&["pages/a/b/c.md", "pages/a/b.md"]),
            &BinaryCollation,
        )
        .unwrap_err();

        assert!(matches!(err, CatalogError::PathConflict { id } if id == "a/b"));
    }

    #[test]
    fn test_folder_shadowing_file_is_rejected() {
        let err = build_tree(
            &descriptors(&["pages/a/b.md", "pages/a/b/c.md"]),
            &BinaryCollation,
        )
        .unwrap_err();

        assert!(matches!(err, CatalogError::PathConflict { id } if id == "a/b"));
    }

    #[test]
    fn test_deep_nesting() {
        let tree = build(&["pages/a/b/c/d.md"]);

        let mut node = &tree[0];
        for expected in ["a", "a/b", "a/b/c"] {
            assert_eq!(node.id, expected);
            assert_eq!(node.kind, NodeKind::Folder);
            node = &node.children[0];
        }
        assert_eq!(node.id, "a/b/c/d");
        assert_eq!(node.kind, NodeKind::File);
    }

    #[test]
    fn test_serialization_shape() {
        let tree = build(&["pages/a/b.md"]);
        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(json[0]["type"], "folder");
        assert!(json[0].get("path").is_none());
        assert_eq!(json[0]["children"][0]["type"], "file");
        assert_eq!(json[0]["children"][0]["path"], "/notes/a/b");
        assert!(json[0]["children"][0].get("children").is_none());
    }
}
