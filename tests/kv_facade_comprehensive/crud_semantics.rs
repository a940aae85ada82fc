//! Tier 2: CRUD Semantics

use crate::test_utils::*;
use serde_json::{json, Value};

#[tokio::test]
async fn test_put_then_get() {
    let (_store, kv) = create_test_kv();
    kv.put("a/b", json!(42)).await.unwrap();
    assert_eq!(kv.get("a/b").await.unwrap(), Record::new("a/b", json!(42)));
}

#[tokio::test]
async fn test_put_returns_write_event() {
    let (_store, kv) = create_test_kv();
    let event = kv.put("a/b", json!({"n": 1})).await.unwrap();
    let body = serde_json::to_value(&event).unwrap();
    assert_eq!(body["event"], "write");
    assert_eq!(body["key"], "a/b");
    assert!(body["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_reserved_delimiter_rejected_without_write() {
    let (store, kv) = create_test_kv();
    let err = kv.put("a:b", json!("v")).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(
        serde_json::to_value(err.to_body()).unwrap(),
        json!({"code": 400, "message": "The ':' is a reserved character."})
    );
    assert_eq!(store.stats().writes, 0);
    assert!(store.is_empty(COLLECTION));
}

#[tokio::test]
async fn test_missing_key_reads_null() {
    let (_store, kv) = create_test_kv();
    assert_eq!(kv.get("nope").await.unwrap(), Record::empty("nope"));
}

#[tokio::test]
async fn test_falsy_value_indistinguishable_from_missing() {
    let (_store, kv) = create_test_kv();
    for (key, value) in [("f", json!(false)), ("z", json!(0)), ("s", json!("")), ("n", Value::Null)] {
        kv.put(key, value).await.unwrap();
        assert_eq!(kv.get(key).await.unwrap(), Record::empty(key));
    }
    kv.put("arr", json!([])).await.unwrap();
    assert_eq!(kv.get("arr").await.unwrap().value, json!([]));
}

#[tokio::test]
async fn test_store_errors_are_values() {
    let (store, kv) = create_test_kv();
    store.failures().fail_writes(1);
    let err = kv.put("a", json!(1)).await.unwrap_err();
    assert!(matches!(err, Error::Store(_)));
    assert_eq!(err.to_body().code, 400);

    store.failures().fail_reads(1);
    let err = kv.get("a").await.unwrap_err();
    assert!(err.to_string().contains("injected read failure"));
}

#[tokio::test]
async fn test_del_removes_records() {
    let (store, kv) = create_test_kv();
    seed(&kv, &["a", "b", "c/d"]).await;

    let event = kv.del("a").await;
    assert_eq!(event.kind(), EventKind::Delete);
    assert_eq!(kv.get("a").await.unwrap().value, Value::Null);

    kv.del(vec!["b", "c/d"]).await;
    assert!(store.is_empty(COLLECTION));
}

#[tokio::test]
async fn test_del_missing_key_reports_it() {
    let (_store, kv) = create_test_kv();
    let event = kv.del(["ghost"]).await;
    assert_eq!(event.keys(), vec!["ghost"]);
    assert!(event.failures().is_empty());
}

#[tokio::test]
async fn test_concurrent_puts_same_key_last_writer_wins() {
    let (_store, kv) = create_test_kv();
    let (a, b) = tokio::join!(kv.put("k", json!(1)), kv.put("k", json!(2)));
    a.unwrap();
    b.unwrap();
    let value = kv.get("k").await.unwrap().value;
    assert!(value == json!(1) || value == json!(2));
}
