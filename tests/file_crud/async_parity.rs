//! Blocking and async forms agree on identical state.

use crate::{create_test_db, seed};
use jsondb::Shape;
use serde_json::json;

#[tokio::test]
async fn object_operations_match() {
    let (db, dir) = create_test_db();
    let a = seed(&dir, "a.json", r#"{"x":1}"#);
    let b = seed(&dir, "b.json", r#"{"x":1}"#);

    let sync = db.files.set(&a, Shape::Object, "y", json!([2])).unwrap();
    let asynchronous = db.files.set_async(&b, Shape::Object, "y", json!([2])).await.unwrap();
    assert_eq!(sync.value, asynchronous.value);

    let sync = db.files.remove(&a, Shape::Object, "x").unwrap();
    let asynchronous = db.files.remove_async(&b, Shape::Object, "x").await.unwrap();
    assert_eq!(sync.address, asynchronous.address);

    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    assert_eq!(
        db.files.read(&a).unwrap(),
        db.files.read_async(&b).await.unwrap()
    );
}

#[tokio::test]
async fn array_operations_match() {
    let (db, dir) = create_test_db();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");

    db.files.add(&a, json!("first")).unwrap();
    db.files.add_async(&b, json!("first")).await.unwrap();
    db.files.set(&a, Shape::Array, 0usize, json!("zeroth")).unwrap();
    db.files.set_async(&b, Shape::Array, 0usize, json!("zeroth")).await.unwrap();

    let sync = db.files.get(&a, Shape::Array, 1usize).unwrap();
    let asynchronous = db.files.get_async(&b, Shape::Array, 1usize).await.unwrap();
    assert_eq!(sync.value, Some(json!("first")));
    assert_eq!(sync.value, asynchronous.value);
    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
}

#[tokio::test]
async fn errors_match() {
    let (db, dir) = create_test_db();
    let bad = seed(&dir, "bad.json", "[1,");
    let missing = dir.path().join("missing.json");

    assert_eq!(
        db.files.get(&bad, Shape::Array, 0usize).unwrap_err(),
        db.files.get_async(&bad, Shape::Array, 0usize).await.unwrap_err()
    );
    assert_eq!(
        db.files.remove(&missing, Shape::Object, "k").unwrap_err(),
        db.files.remove_async(&missing, Shape::Object, "k").await.unwrap_err()
    );
    assert_eq!(
        db.files.is_folder(&missing).unwrap_err().code(),
        db.files.is_folder_async(&missing).await.unwrap_err().code()
    );
}

#[tokio::test]
async fn env_and_folder_match() {
    let (db, dir) = create_test_db();
    let env = seed(&dir, ".env", "A=1\nB=2\n");

    assert_eq!(
        db.files.read_env(&env).unwrap(),
        db.files.read_env_async(&env).await.unwrap()
    );
    assert!(db.files.is_folder_async(dir.path()).await.unwrap());
}
