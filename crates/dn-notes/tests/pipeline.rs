//! End-to-end flow: catalog construction, navigation, lazy loading and
//! rendering of the loaded content.

use std::sync::Arc;

use dn_notes::{
    MemoryStore, NodeKind, NoteRepository, RepositoryConfig, Session, default_collation,
    route_segments,
};
use dn_source::{AssetCatalog, MockSource, NoteSource};
use pretty_assertions::assert_eq;

fn sample_source() -> MockSource {
    MockSource::new()
        .with_note(
            "pages/rust/ownership.md",
            "# Ownership\n\n## Moves\n\n## Moves\n\n```rust\nlet a = b;\n```",
        )
        .with_note("pages/rust/borrowing.md", "# Borrowing\n\n![stack](./img/stack.png)")
        .with_note("pages/journal/2024-01-01.md", "# New Year\n\nhttps://example.com")
        .with_note("pages/readme.md", "plain note")
        .with_assets(AssetCatalog::new().with_asset("rust/img/stack.png", "/assets/stack.png"))
}

fn repository(source: &Arc<MockSource>) -> NoteRepository {
    NoteRepository::new(
        Arc::clone(source) as Arc<dyn NoteSource>,
        &RepositoryConfig::default(),
        default_collation().as_ref(),
    )
    .unwrap()
}

#[test]
fn catalog_and_tree_agree() {
    let source = Arc::new(sample_source());
    let repo = repository(&source);

    assert_eq!(repo.catalog().len(), 4);

    // Folders first at every level; every leaf corresponds to a catalog entry.
    let tree = repo.tree();
    assert!(tree[0].kind == NodeKind::Folder && tree[1].kind == NodeKind::Folder);
    assert_eq!(tree[2].label, "readme");

    for descriptor in repo.catalog() {
        assert!(repo.is_valid_route(&descriptor.route_path));
        let decoded = route_segments(&descriptor.route_path, "/notes").unwrap();
        assert_eq!(decoded, descriptor.segments);
    }
}

#[tokio::test]
async fn load_then_render_is_consistent() {
    let source = Arc::new(sample_source());
    let repo = repository(&source);

    let note = repo.load("/notes/rust/ownership").await.unwrap();
    let rendered = dn_renderer::render(&note.content);

    // Outline ids are unique and all present in the markup.
    let ids: Vec<&str> = rendered.outline.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids, vec!["ownership", "moves", "moves-1"]);
    for id in ids {
        assert!(rendered.html.contains(&format!(r#"id="{id}""#)));
    }
    assert!(rendered.html.contains(r#"class="language-rust""#));

    // A second load serves the cache; rendering is repeatable.
    let again = repo.load("/notes/rust/ownership").await.unwrap();
    assert_eq!(source.fetch_count("pages/rust/ownership.md"), 1);
    assert_eq!(dn_renderer::render(&again.content).outline.len(), 3);
}

#[tokio::test]
async fn asset_references_resolve_against_the_loaded_note() {
    let source = Arc::new(sample_source());
    let repo = repository(&source);
    let assets = source.assets();

    let note = repo.load("/notes/rust/borrowing").await.unwrap();
    let rendered = dn_renderer::render(&note.content);
    assert!(rendered.html.contains(r#"src="./img/stack.png""#));

    // The presentation layer looks the reference up with the note's own path.
    let located = assets.resolve(&format!("{}.md", note.descriptor.path), "./img/stack.png");
    assert_eq!(located, Some("/assets/stack.png"));
}

#[tokio::test]
async fn session_remembers_the_last_valid_route() {
    let source = Arc::new(sample_source());
    let repo = repository(&source);
    let session = Session::new(Arc::new(MemoryStore::new()));

    let route = "/notes/journal/2024-01-01";
    assert!(repo.load(route).await.is_some());
    session.remember_route(route);

    assert_eq!(session.saved_route(&repo), Some(route.to_owned()));

    session.remember_route("");
    assert_eq!(session.saved_route(&repo), None);
}
