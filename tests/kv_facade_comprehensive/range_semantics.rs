//! Tier 3: Range Semantics
//!
//! Bounds are exclusive, direction is honored by the store, `limit: 0` and a
//! missing limit both mean unbounded.

use crate::test_utils::*;
use serde_json::json;

async fn abcd() -> (std::sync::Arc<InMemoryStore>, KVFacade) {
    let (store, kv) = create_test_kv();
    seed(&kv, &["c", "a", "d", "b"]).await;
    (store, kv)
}

#[tokio::test]
async fn test_exclusive_bounds_ascending() {
    let (_store, kv) = abcd().await;
    let items = kv
        .list(&Query::new().greater_than("a").less_than("d"))
        .await
        .unwrap();
    assert_eq!(keys_of(&items), vec!["b", "c"]);
}

#[tokio::test]
async fn test_exclusive_bounds_descending() {
    let (_store, kv) = abcd().await;
    let items = kv
        .list(&Query::new().greater_than("a").less_than("d").reversed())
        .await
        .unwrap();
    assert_eq!(keys_of(&items), vec!["c", "b"]);
}

#[tokio::test]
async fn test_single_bound() {
    let (_store, kv) = abcd().await;
    let above = kv.list(&Query::new().greater_than("b")).await.unwrap();
    assert_eq!(keys_of(&above), vec!["c", "d"]);
    let below = kv.list(&Query::new().less_than("b")).await.unwrap();
    assert_eq!(keys_of(&below), vec!["a"]);
}

#[tokio::test]
async fn test_bounds_need_not_exist() {
    let (_store, kv) = abcd().await;
    let items = kv
        .list(&Query::new().greater_than("aa").less_than("cc"))
        .await
        .unwrap();
    assert_eq!(keys_of(&items), vec!["b", "c"]);
}

#[tokio::test]
async fn test_empty_range() {
    let (_store, kv) = abcd().await;
    let items = kv
        .list(&Query::new().greater_than("c").less_than("d"))
        .await
        .unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_empty_bounds_mean_unbounded() {
    let (_store, kv) = abcd().await;

    let below: Query = serde_json::from_value(json!({"lt": ""})).unwrap();
    assert_eq!(keys_of(&kv.list(&below).await.unwrap()), vec!["a", "b", "c", "d"]);

    let above: Query = serde_json::from_value(json!({"gt": ""})).unwrap();
    assert_eq!(keys_of(&kv.list(&above).await.unwrap()), vec!["a", "b", "c", "d"]);

    let built = Query::new().greater_than("").less_than("").reversed();
    assert_eq!(keys_of(&kv.list(&built).await.unwrap()), vec!["d", "c", "b", "a"]);
}

#[tokio::test]
async fn test_empty_lower_bound_keeps_empty_key() {
    let (_store, kv) = abcd().await;
    kv.put("", json!(1)).await.unwrap();

    let items = kv.list(&Query::new().greater_than("")).await.unwrap();
    assert_eq!(keys_of(&items), vec!["", "a", "b", "c", "d"]);
}

#[tokio::test]
async fn test_numeric_bounds_compare_as_text() {
    let (_store, kv) = create_test_kv();
    seed(&kv, &["1", "5", "50", "9"]).await;

    let query: Query = serde_json::from_value(json!({"gt": 5, "lt": 9})).unwrap();
    assert_eq!(keys_of(&kv.list(&query).await.unwrap()), vec!["50"]);
}

#[tokio::test]
async fn test_hierarchical_prefix_range() {
    let (_store, kv) = create_test_kv();
    seed(&kv, &["users/1", "users/2", "users/3", "usersx", "teams/1"]).await;

    // Everything strictly between "users/" and "users/~"
    let items = kv
        .list(&Query::new().greater_than("users/").less_than("users/~"))
        .await
        .unwrap();
    assert_eq!(keys_of(&items), vec!["users/1", "users/2", "users/3"]);
}

#[tokio::test]
async fn test_limit_caps_results() {
    let (_store, kv) = create_test_kv();
    seed(&kv, &["a", "b", "c", "d", "e"]).await;

    let items = kv.list(&Query::new().with_limit(2)).await.unwrap();
    assert_eq!(keys_of(&items), vec!["a", "b"]);

    let items = kv.list(&Query::new().with_limit(2).reversed()).await.unwrap();
    assert_eq!(keys_of(&items), vec!["e", "d"]);
}

#[tokio::test]
async fn test_missing_limit_returns_all() {
    let (_store, kv) = create_test_kv();
    seed(&kv, &["a", "b", "c", "d", "e"]).await;
    assert_eq!(kv.list(&Query::new()).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_zero_limit_is_unbounded() {
    let (_store, kv) = create_test_kv();
    seed(&kv, &["a", "b", "c", "d", "e"]).await;
    let query: Query = serde_json::from_value(json!({"limit": 0})).unwrap();
    assert_eq!(kv.list(&query).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_non_numeric_limit_is_unbounded() {
    let (_store, kv) = create_test_kv();
    seed(&kv, &["a", "b", "c"]).await;
    let query: Query = serde_json::from_value(json!({"limit": "lots"})).unwrap();
    assert_eq!(kv.list(&query).await.unwrap().len(), 3);
    let query: Query = serde_json::from_value(json!({"limit": "2"})).unwrap();
    assert_eq!(kv.list(&query).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_limit_larger_than_set() {
    let (_store, kv) = create_test_kv();
    seed(&kv, &["a", "b"]).await;
    assert_eq!(kv.list(&Query::new().with_limit(10)).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_values_shape() {
    let (_store, kv) = create_test_kv();
    kv.put("a/x", json!({"n": 1})).await.unwrap();
    kv.put("b", json!(0)).await.unwrap();

    let items = kv.list(&Query::new().with_values()).await.unwrap();
    assert_eq!(
        serde_json::to_value(&items).unwrap(),
        json!([{"key": "a/x", "value": {"n": 1}}, {"key": "b", "value": null}])
    );

    let items = kv.list(&Query::new()).await.unwrap();
    assert_eq!(serde_json::to_value(&items).unwrap(), json!(["a/x", "b"]));
}

#[tokio::test]
async fn test_query_failure_is_error_value() {
    let (store, kv) = abcd().await;
    store.failures().fail_queries(1);
    let err = kv.list(&Query::new()).await.unwrap_err();
    assert_eq!(err.to_body().code, 400);
    // Next call succeeds
    assert_eq!(kv.list(&Query::new()).await.unwrap().len(), 4);
}
