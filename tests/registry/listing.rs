//! Registration and listing scenarios.

use crate::{create_seeded_db, seed_folder};
use jsondb::{DatabaseId, Shape};
use serde_json::json;

#[test]
fn register_then_list_by_id() {
    let (db, dir) = create_seeded_db(&[
        ("alice.json", r#"{"age":30}"#),
        ("bob.json", r#"{"age":41}"#),
    ]);
    std::fs::create_dir(dir.path().join("archive")).unwrap();

    let record = db
        .databases
        .register(dir.path(), Shape::Object, Some("users"))
        .unwrap();
    assert_eq!(record.id.as_str().len(), 8);
    assert!(record.id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(record.folder, dir.path());

    let view = db.databases.get_by_id(&record.id).unwrap();
    assert_eq!(view.name.as_deref(), Some("users"));
    assert_eq!(view.shape, Shape::Object);

    // Subdirectories are not files
    let names: Vec<_> = view.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["alice.json", "bob.json"]);
    assert_eq!(view.file("bob.json").unwrap().content, Some(json!({"age": 41})));
}

#[test]
fn view_serializes_with_type_field() {
    let (db, dir) = create_seeded_db(&[("a.json", "[1]")]);
    let record = db.databases.register(dir.path(), Shape::Array, None).unwrap();

    let view = serde_json::to_value(db.databases.get_by_id(&record.id).unwrap()).unwrap();

    assert_eq!(view["id"], json!(record.id.as_str()));
    assert_eq!(view["type"], json!("array"));
    assert_eq!(view["files"][0]["name"], json!("a.json"));
    assert_eq!(view["files"][0]["type"], json!("array"));
    assert_eq!(view["files"][0]["content"], json!([1]));
}

#[test]
fn unreadable_file_is_listed_without_content() {
    let (db, dir) = create_seeded_db(&[("good.json", "[1]"), ("broken.json", "[1,")]);
    let record = db.databases.register(dir.path(), Shape::Array, None).unwrap();

    let view = db.databases.get_by_id(&record.id).unwrap();

    assert_eq!(view.files.len(), 2);
    assert_eq!(view.file("broken.json").unwrap().content, None);
    assert_eq!(view.file("good.json").unwrap().content, Some(json!([1])));
}

#[test]
fn unknown_id_is_not_found() {
    let db = jsondb::JsonDb::new();
    let err = db
        .databases
        .get_by_id(&DatabaseId::from("0badf00d"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn missing_folder_fails_only_when_listed() {
    let db = jsondb::JsonDb::new();
    let record = db
        .databases
        .register("/nonexistent/jsondb/folder", Shape::Object, None)
        .unwrap();

    let err = db.databases.get_by_id(&record.id).unwrap_err();
    assert_eq!(err.code(), "IOError");
}

#[test]
fn get_by_name_lists_every_match_in_order() {
    let (db, first) = create_seeded_db(&[("one.json", "[1]")]);
    let second = tempfile::tempdir().unwrap();
    seed_folder(second.path(), &[("two.json", "[2]")]);
    let other = tempfile::tempdir().unwrap();

    db.databases.register(first.path(), Shape::Array, Some("nums")).unwrap();
    db.databases.register(other.path(), Shape::Array, Some("other")).unwrap();
    db.databases.register(second.path(), Shape::Array, Some("nums")).unwrap();

    let views = db.databases.get_by_name("nums").unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].files[0].name, "one.json");
    assert_eq!(views[1].files[0].name, "two.json");

    assert!(db.databases.get_by_name("none").unwrap().is_empty());
}

#[test]
fn handles_edit_their_files() {
    let (db, dir) = create_seeded_db(&[("log.json", "[]"), ("users.json", "{}")]);
    let logs = db.databases.open(dir.path(), Shape::Array, Some("logs")).unwrap();

    let view = logs.files().unwrap();
    let log = view.file("log.json").unwrap();
    log.add(json!("started")).unwrap();
    log.set(0usize, json!("booting")).unwrap();
    assert_eq!(log.read().unwrap(), json!(["booting", "started"]));
    log.remove(1usize).unwrap();
    assert_eq!(log.get(0usize).unwrap().value, Some(json!("booting")));

    let users = db.databases.open(dir.path(), Shape::Object, None).unwrap();
    let view = users.files().unwrap();
    let handle = view.file("users.json").unwrap();
    assert!(!handle.can_add());
    assert_eq!(handle.add(json!(1)).unwrap_err().code(), "InvalidShape");

    assert_eq!(db.databases.records().len(), 2);
}

#[tokio::test]
async fn async_listing_matches_blocking() {
    let (db, dir) = create_seeded_db(&[("a.json", r#"{"k":"v"}"#), ("b.json", "oops")]);
    let record = db
        .databases
        .register(dir.path(), Shape::Object, Some("mixed"))
        .unwrap();

    assert_eq!(
        db.databases.get_by_id(&record.id).unwrap(),
        db.databases.get_by_id_async(&record.id).await.unwrap()
    );
    assert_eq!(
        db.databases.get_by_name("mixed").unwrap(),
        db.databases.get_by_name_async("mixed").await.unwrap()
    );

    let handle = db
        .databases
        .get_by_id_async(&record.id)
        .await
        .unwrap()
        .files
        .remove(0);
    handle.set_async("k2", json!(2)).await.unwrap();
    assert_eq!(handle.read_async().await.unwrap(), json!({"k": "v", "k2": 2}));
}
