//! Tier 6: Partial Failure & Races
//!
//! Bulk calls keep reporting every input key even when some sub-operations
//! fail. The `failed` list is the only place the failures surface.
//! Delete-all is two-phase and not atomic.

use crate::test_utils::*;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_del_partial_failure_invisible_in_keys() {
    let (store, kv) = create_test_kv();
    seed(&kv, &["a", "b", "c"]).await;
    store.failures().fail_id("b");
    let seen = record_events(&kv);

    let event = kv.del(vec!["a", "b", "c"]).await;

    assert_eq!(event.keys(), vec!["a", "b", "c"]);
    assert_eq!(event.failures().len(), 1);
    assert_eq!(event.failures()[0].key, "b");
    assert_eq!(seen.lock().len(), 1);
    assert_eq!(store.ids(COLLECTION), vec!["b".to_string()]);
}

#[tokio::test]
async fn test_del_does_not_stop_at_first_failure() {
    let (store, kv) = create_test_kv();
    seed(&kv, &["a", "b", "c", "d"]).await;
    store.failures().fail_deletes(1);

    let event = kv.del(vec!["a", "b", "c", "d"]).await;
    assert_eq!(event.failures().len(), 1);
    assert_eq!(store.stats().deletes, 4);
    assert_eq!(store.len(COLLECTION), 1);
}

#[tokio::test]
async fn test_import_partial_store_failure() {
    let (store, kv) = create_test_kv();
    store.failures().fail_id("bad");

    let event = kv
        .import_db(vec![
            Record::new("good", json!(1)),
            Record::new("bad", json!(2)),
            Record::new("fine", json!(3)),
        ])
        .await
        .unwrap();

    assert_eq!(event.keys(), vec!["good", "bad", "fine"]);
    assert_eq!(event.failures()[0].key, "bad");
    assert_eq!(store.len(COLLECTION), 2);
}

#[tokio::test]
async fn test_import_failure_list_not_serialized_when_clean() {
    let (_store, kv) = create_test_kv();
    let event = kv.import_db(vec![Record::new("a", json!(1))]).await.unwrap();
    let body = serde_json::to_value(&event).unwrap();
    assert!(body.get("failed").is_none());
    assert_eq!(body["keys"], json!(["a"]));
}

#[tokio::test]
async fn test_import_invalid_key_rejects_but_keeps_other_writes() {
    let (store, kv) = create_test_kv();
    let seen = record_events(&kv);

    let err = kv
        .import_db(vec![Record::new("a", json!(1)), Record::new("b:c", json!(2))])
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(store.ids(COLLECTION), vec!["a".to_string()]);
    assert!(seen
        .lock()
        .iter()
        .all(|e| e.kind() != EventKind::ImportDb));
}

#[tokio::test]
async fn test_delete_db_partial_failure_still_completes() {
    let (store, kv) = create_test_kv();
    seed(&kv, &["a", "b", "c"]).await;
    store.failures().fail_id("c");
    let seen = record_events(&kv);

    let event = kv.delete_db().await.unwrap();
    assert_eq!(event.kind(), EventKind::DeleteDb);
    assert_eq!(store.ids(COLLECTION), vec!["c".to_string()]);

    let seen = seen.lock();
    assert_eq!(seen[0].keys(), vec!["a", "b", "c"]);
    assert_eq!(seen[0].failures().len(), 1);
}

#[tokio::test]
async fn test_delete_db_race_window_leaves_late_write() {
    init_tracing();
    let inner = Arc::new(InMemoryStore::new());
    let racing = Arc::new(WriteAfterListStore::new(inner.clone(), "late"));
    let kv = KVFacade::new(racing, COLLECTION).unwrap();

    // The first query is the listing phase of delete_db; the wrapper writes
    // "late" after it returns and before the delete phase starts.
    kv.put("early/1", json!(1)).await.unwrap();
    kv.put("early/2", json!(2)).await.unwrap();
    kv.delete_db().await.unwrap();

    assert_eq!(inner.ids(COLLECTION), vec!["late".to_string()]);
    assert_eq!(
        kv.export_db().await.unwrap(),
        vec![Record::new("late", json!("late"))]
    );
}
