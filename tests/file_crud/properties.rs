//! Property tests over real files.

use crate::create_test_db;
use jsondb::{Address, Shape, Value};
use proptest::prelude::*;

fn finite_f64() -> impl Strategy<Value = Value> {
    any::<f64>().prop_filter_map("finite", |f| serde_json::Number::from_f64(f).map(Value::Number))
}

/// Storable on its own: anything but `null`.
fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        finite_f64(),
        any::<bool>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

fn nested_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![leaf(), Just(Value::Null)]
}

fn document() -> impl Strategy<Value = Value> {
    let nested = nested_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
    .boxed();
    prop_oneof![
        leaf(),
        prop::collection::vec(nested.clone(), 0..4).prop_map(Value::Array),
        prop::collection::btree_map("[a-z]{1,6}", nested, 0..4)
            .prop_map(|m| Value::Object(m.into_iter().collect())),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn add_then_read_ends_with_value(
        initial in prop::collection::vec(nested_leaf(), 0..8),
        value in document(),
    ) {
        let (db, dir) = create_test_db();
        let path = dir.path().join("log.json");
        std::fs::write(&path, serde_json::to_vec(&initial).unwrap()).unwrap();

        db.files.add(&path, value.clone()).unwrap();

        let doc = db.files.read(&path).unwrap();
        let items = doc.as_array().unwrap();
        prop_assert_eq!(items.len(), initial.len() + 1);
        prop_assert_eq!(items.last(), Some(&value));
    }

    #[test]
    fn floats_survive_unrelated_edits(
        floats in prop::collection::vec(finite_f64(), 1..6),
        value in leaf(),
    ) {
        let (db, dir) = create_test_db();
        let path = dir.path().join("floats.json");

        for f in &floats {
            db.files.add(&path, f.clone()).unwrap();
        }
        db.files.add(&path, value.clone()).unwrap();

        let mut expected = floats;
        expected.push(value);
        prop_assert_eq!(db.files.read(&path).unwrap(), Value::Array(expected));
    }

    #[test]
    fn set_then_get_object(key in "[a-z]{1,10}", value in document()) {
        let (db, dir) = create_test_db();
        let path = dir.path().join("users.json");

        db.files.set(&path, Shape::Object, key.as_str(), value.clone()).unwrap();
        let item = db.files.get(&path, Shape::Object, key.as_str()).unwrap();

        prop_assert_eq!(item.value, Some(value));
    }

    #[test]
    fn set_on_array_inserts(
        initial in prop::collection::vec(nested_leaf(), 0..8),
        index in 0usize..12,
        value in leaf(),
    ) {
        let (db, dir) = create_test_db();
        let path = dir.path().join("list.json");
        std::fs::write(&path, serde_json::to_vec(&initial).unwrap()).unwrap();

        db.files.set(&path, Shape::Array, index, value.clone()).unwrap();

        let doc = db.files.read(&path).unwrap();
        let items = doc.as_array().unwrap();
        prop_assert_eq!(items.len(), initial.len() + 1);
        prop_assert_eq!(&items[index.min(initial.len())], &value);
    }

    #[test]
    fn remove_key_then_get_is_absent(key in "[a-z]{1,10}", value in leaf()) {
        let (db, dir) = create_test_db();
        let path = dir.path().join("users.json");

        db.files.set(&path, Shape::Object, key.as_str(), value).unwrap();
        db.files.remove(&path, Shape::Object, key.as_str()).unwrap();
        let item = db.files.get(&path, Shape::Object, key.as_str()).unwrap();

        prop_assert_eq!(item.value, None);
    }

    #[test]
    fn remove_out_of_range_index_keeps_array(
        initial in prop::collection::vec(nested_leaf(), 0..8),
        extra in 0usize..4,
    ) {
        let (db, dir) = create_test_db();
        let path = dir.path().join("list.json");
        let body = serde_json::to_vec(&initial).unwrap();
        std::fs::write(&path, &body).unwrap();

        let removed = db
            .files
            .remove(&path, Shape::Array, Address::Index(initial.len() + extra))
            .unwrap();

        prop_assert_eq!(removed.address, Address::Index(initial.len() + extra));
        prop_assert_eq!(db.files.read(&path).unwrap(), Value::Array(initial));
    }

    #[test]
    fn object_round_trip(entries in prop::collection::btree_map("[a-z]{1,6}", document(), 0..6)) {
        let (db, dir) = create_test_db();
        let path = dir.path().join("doc.json");

        for (key, value) in &entries {
            db.files.set(&path, Shape::Object, key.as_str(), value.clone()).unwrap();
        }

        let expected: serde_json::Map<String, Value> = entries.into_iter().collect();
        if expected.is_empty() {
            prop_assert!(!path.exists());
        } else {
            prop_assert_eq!(db.files.read(&path).unwrap(), Value::Object(expected));
        }
    }
}
