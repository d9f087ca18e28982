use ideas::core::store::{IDEAS_FILE_NAME, Store, StoreConfig, next_id};
use ideas::plugins::ideas::{Idea, IdeaStatus};
use std::fs;
use tempfile::tempdir;

fn idea(id: u64, title: &str, category: &str, notes: &str, status: IdeaStatus) -> Idea {
    Idea {
        id,
        title: title.to_string(),
        category: category.to_string(),
        notes: notes.to_string(),
        status,
        created_at: "2026-10-16T08:15:00".to_string(),
    }
}

#[test]
fn store_created_on_first_load() {
    let tmp = tempdir().unwrap();
    let data_dir = tmp.path().join("data");
    let store = Store::new(StoreConfig::new(&data_dir));
    assert!(!data_dir.exists());

    let ideas = store.load().unwrap();
    assert!(ideas.is_empty());
    assert_eq!(store.ideas_path(), data_dir.join(IDEAS_FILE_NAME));
    assert_eq!(fs::read_to_string(store.ideas_path()).unwrap(), "[]");
}

#[test]
fn save_then_load_round_trips_every_field() {
    let tmp = tempdir().unwrap();
    let store = Store::new(StoreConfig::new(tmp.path()));
    let ideas = vec![
        idea(1, "Schwimmbäder pro 100.000 Einwohner", "Infrastruktur", "Quelle: Destatis", IdeaStatus::Idea),
        idea(2, "東京の駅", "", "", IdeaStatus::Planned),
        idea(5, "Clinics \"per\" capita", "Health", "line\nbreak", IdeaStatus::Implemented),
    ];

    store.save(&ideas).unwrap();
    assert_eq!(store.load().unwrap(), ideas);

    let raw = fs::read_to_string(store.ideas_path()).unwrap();
    assert!(raw.contains("Schwimmbäder"));
    assert!(raw.contains("東京の駅"));
    assert!(!raw.contains("\\u"));
}

#[test]
fn empty_sequence_saves_as_empty_list() {
    let tmp = tempdir().unwrap();
    let store = Store::new(StoreConfig::new(tmp.path()));
    store.save(&[]).unwrap();
    assert_eq!(fs::read_to_string(store.ideas_path()).unwrap().trim(), "[]");
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn malformed_documents_load_as_empty_without_rewrite() {
    let cases = [
        "",
        "not json at all",
        "{\"id\": 1}",
        "[{\"title\": \"no id\"}]",
        "[{\"id\": 1, \"title\": \"x\", \"status\": \"done\"}]",
    ];
    for content in cases {
        let tmp = tempdir().unwrap();
        let store = Store::new(StoreConfig::new(tmp.path()));
        fs::write(store.ideas_path(), content).unwrap();

        assert!(store.load().unwrap().is_empty(), "content: {:?}", content);
        assert_eq!(fs::read_to_string(store.ideas_path()).unwrap(), content);
    }
}

#[test]
fn invalid_utf8_loads_as_empty() {
    let tmp = tempdir().unwrap();
    let store = Store::new(StoreConfig::new(tmp.path()));
    fs::write(store.ideas_path(), b"\xff\xfe[]").unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn records_missing_optional_fields_load_with_defaults() {
    let tmp = tempdir().unwrap();
    let store = Store::new(StoreConfig::new(tmp.path()));
    fs::write(
        store.ideas_path(),
        r#"[{"id": 3, "title": "legacy"}, {"id": 9, "title": "full", "category": "Infra", "notes": "n", "status": "planned", "created_at": "2025-01-02T03:04:05"}]"#,
    )
    .unwrap();

    let ideas = store.load().unwrap();
    assert_eq!(ideas.len(), 2);
    assert_eq!(ideas[0].status, IdeaStatus::Idea);
    assert_eq!(ideas[0].created_at, "");
    assert_eq!(ideas[1].category, "Infra");
    assert_eq!(next_id(&ideas).unwrap(), 10);
}

#[test]
fn save_replaces_previous_content_entirely() {
    let tmp = tempdir().unwrap();
    let store = Store::new(StoreConfig::new(tmp.path()));
    store
        .save(&[
            idea(1, "a", "", "", IdeaStatus::Idea),
            idea(2, "b", "", "", IdeaStatus::Idea),
        ])
        .unwrap();
    store.save(&[idea(2, "b", "", "", IdeaStatus::Idea)]).unwrap();

    let ideas = store.load().unwrap();
    assert_eq!(ideas.len(), 1);
    assert_eq!(ideas[0].id, 2);
}
