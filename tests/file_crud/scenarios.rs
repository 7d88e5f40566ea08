//! Edge cases of the file operations.

use crate::{create_test_db, seed};
use jsondb::{Address, Shape, Value};
use serde_json::json;

#[test]
fn add_creates_missing_file() {
    let (db, dir) = create_test_db();
    let path = dir.path().join("new.json");

    let added = db.files.add(&path, json!({"id": 1})).unwrap();

    assert_eq!(added.shape, Shape::Array);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"[{"id":1}]"#);
}

#[test]
fn get_on_missing_file_is_io_error() {
    let (db, dir) = create_test_db();
    let err = db
        .files
        .get(dir.path().join("nope.json"), Shape::Object, "a")
        .unwrap_err();
    assert_eq!(err.code(), "IOError");
}

#[test]
fn remove_on_missing_file_is_io_error() {
    let (db, dir) = create_test_db();
    let path = dir.path().join("nope.json");
    let err = db.files.remove(&path, Shape::Array, 0usize).unwrap_err();
    assert_eq!(err.code(), "IOError");
    assert!(!path.exists());
}

#[test]
fn corrupt_file_is_parse_error_and_untouched() {
    let (db, dir) = create_test_db();
    let path = seed(&dir, "bad.json", "{not json");

    let err = db.files.set(&path, Shape::Object, "a", json!(1)).unwrap_err();

    assert_eq!(err.code(), "ParseError");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not json");
}

#[test]
fn declared_shape_must_match_file() {
    let (db, dir) = create_test_db();
    let path = seed(&dir, "obj.json", r#"{"a":1}"#);

    let err = db.files.add(&path, json!(2)).unwrap_err();
    assert_eq!(err.code(), "InvalidShape");

    let err = db.files.get(&path, Shape::Array, 0usize).unwrap_err();
    assert_eq!(err.code(), "InvalidShape");
}

#[test]
fn address_must_fit_shape() {
    let (db, dir) = create_test_db();
    let path = seed(&dir, "list.json", "[1]");

    let err = db.files.get(&path, Shape::Array, "a").unwrap_err();
    assert_eq!(err.code(), "InvalidArgument");
}

#[test]
fn empty_path_is_missing_argument() {
    let (db, _dir) = create_test_db();
    let err = db.files.read("").unwrap_err();
    assert_eq!(err.code(), "MissingArgument");
}

#[test]
fn array_index_zero_and_falsy_values() {
    let (db, dir) = create_test_db();
    let path = seed(&dir, "list.json", "[]");

    db.files.set(&path, Shape::Array, 0usize, json!(0)).unwrap();
    db.files.set(&path, Shape::Array, 0usize, json!(false)).unwrap();
    db.files.set(&path, Shape::Array, 0usize, json!("")).unwrap();

    assert_eq!(db.files.read(&path).unwrap(), json!(["", false, 0]));
    let first = db.files.get(&path, Shape::Array, 0usize).unwrap();
    assert_eq!(first.value, Some(json!("")));
    assert_eq!(first.address, Address::Index(0));
}

#[test]
fn set_object_overwrites_key() {
    let (db, dir) = create_test_db();
    let path = seed(&dir, "users.json", r#"{"alice":{"age":30}}"#);

    let assigned = db
        .files
        .set(&path, Shape::Object, "alice", json!({"age": 31}))
        .unwrap();

    assert_eq!(
        serde_json::to_value(&assigned).unwrap(),
        json!({
            "path": path,
            "type": "object",
            "key": "alice",
            "value": {"age": 31}
        })
    );
    assert_eq!(
        db.files.read(&path).unwrap(),
        json!({"alice": {"age": 31}})
    );
}

#[test]
fn folder_and_env_helpers() {
    let (db, dir) = create_test_db();
    let env = seed(&dir, ".env", "HOST=localhost\r\nURL=http://x?a=b\n\nHOST=remote\n");

    assert!(db.files.is_folder(dir.path()).unwrap());
    assert!(!db.files.is_folder(&env).unwrap());
    assert_eq!(
        db.files.is_folder(dir.path().join("missing")).unwrap_err().code(),
        "IOError"
    );

    let vars = db.files.read_env(&env).unwrap();
    assert_eq!(vars.get("HOST").map(String::as_str), Some("remote"));
    assert_eq!(vars.get("URL").map(String::as_str), Some("http://x?a=b"));
    assert_eq!(vars.len(), 2);
}

#[test]
fn read_returns_whole_document() {
    let (db, dir) = create_test_db();
    let path = seed(&dir, "doc.json", r#"{"nested":{"list":[1,{"x":null}]}}"#);
    let doc: Value = db.files.read(&path).unwrap();
    assert_eq!(doc["nested"]["list"][1], json!({"x": null}));
}

#[test]
fn null_value_is_missing_argument() {
    let (db, dir) = create_test_db();
    let path = seed(&dir, "users.json", r#"{"a":1}"#);

    let err = db.files.set(&path, Shape::Object, "a", Value::Null).unwrap_err();
    assert_eq!(err.code(), "MissingArgument");
    let err = db.files.add(dir.path().join("log.json"), Value::Null).unwrap_err();
    assert_eq!(err.code(), "MissingArgument");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"a":1}"#);

    db.files.set(&path, Shape::Object, "b", json!([null])).unwrap();
    assert_eq!(db.files.read(&path).unwrap(), json!({"a": 1, "b": [null]}));
}
