//! Registrations from many threads and tasks.

use jsondb::{JsonDb, Shape};
use std::collections::HashSet;
use std::thread;

#[test]
fn concurrent_registrations_are_all_kept() {
    let db = JsonDb::new();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let db = db.clone();
            thread::spawn(move || {
                (0..25)
                    .map(|i| {
                        db.databases
                            .register(format!("/db/{}/{}", t, i), Shape::Array, Some("load"))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(id.is_well_formed());
            ids.insert(id);
        }
    }

    assert_eq!(ids.len(), 200);
    assert_eq!(db.databases.records().len(), 200);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_async_listings() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.json"), "[1,2,3]").unwrap();

    let db = JsonDb::new();
    let record = db
        .databases
        .register(dir.path(), Shape::Array, Some("shared"))
        .unwrap();

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let db = db.clone();
            let id = record.id.clone();
            tokio::spawn(async move { db.databases.get_by_id_async(&id).await })
        })
        .collect();

    for task in tasks {
        let view = task.await.unwrap().unwrap();
        assert_eq!(view.files.len(), 1);
        assert_eq!(view.files[0].content, Some(serde_json::json!([1, 2, 3])));
    }
}
