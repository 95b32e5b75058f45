//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container for efficiency.
//! Run with:
//!
//! ```bash
//! cargo test -p doc-store --test postgres_integration
//! ```

use std::sync::Arc;

use doc_store::{DocumentStore, OrderBy, PostgresDocumentStore, Record, StoreError, record_from};
use serde_json::json;
use serial_test::serial;
use sqlx::PgPool;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            // Create a temporary pool just for the schema setup
            let temp_pool = PgPool::connect(&connection_string).await.unwrap();

            sqlx::raw_sql(include_str!(
                "../../../migrations/001_create_documents_table.sql"
            ))
            .execute(&temp_pool)
            .await
            .unwrap();

            temp_pool.close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool and a cleared table
async fn get_test_store() -> PostgresDocumentStore {
    let info = get_container_info().await;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    sqlx::query("TRUNCATE TABLE documents")
        .execute(&pool)
        .await
        .unwrap();

    PostgresDocumentStore::new(pool)
}

fn record(value: serde_json::Value) -> Record {
    record_from(&value).unwrap()
}

#[tokio::test]
#[serial]
async fn create_and_get_roundtrip() {
    let store = get_test_store().await;

    let id = store
        .create("products", record(json!({"name": "Widget", "price": 2999})))
        .await
        .unwrap();

    let doc = store.get("products", &id).await.unwrap().unwrap();
    assert_eq!(doc.id, id);
    assert_eq!(doc.data.get("name"), Some(&json!("Widget")));
    assert_eq!(doc.data.get("price"), Some(&json!(2999)));
}

#[tokio::test]
#[serial]
async fn get_absent_returns_none() {
    let store = get_test_store().await;
    assert!(store.get("products", "missing").await.unwrap().is_none());
}

#[tokio::test]
#[serial]
async fn list_sorts_like_the_memory_store() {
    let store = get_test_store().await;

    store
        .create("products", record(json!({"name": "Banana"})))
        .await
        .unwrap();
    store
        .create("products", record(json!({"name": "Apple"})))
        .await
        .unwrap();
    store
        .create("orders", record(json!({"name": "Not a product"})))
        .await
        .unwrap();

    let asc = store.list("products", OrderBy::asc("name")).await.unwrap();
    assert_eq!(asc.len(), 2);
    assert_eq!(asc[0].data.get("name"), Some(&json!("Apple")));

    let desc = store.list("products", OrderBy::desc("name")).await.unwrap();
    assert_eq!(desc[0].data.get("name"), Some(&json!("Banana")));
}

#[tokio::test]
#[serial]
async fn update_merges_partial_record() {
    let store = get_test_store().await;

    let id = store
        .create("orders", record(json!({"status": "pending", "total": 500})))
        .await
        .unwrap();

    store
        .update("orders", &id, record(json!({"status": "shipped"})))
        .await
        .unwrap();

    let doc = store.get("orders", &id).await.unwrap().unwrap();
    assert_eq!(doc.data.get("status"), Some(&json!("shipped")));
    assert_eq!(doc.data.get("total"), Some(&json!(500)));
}

#[tokio::test]
#[serial]
async fn update_absent_fails_not_found() {
    let store = get_test_store().await;

    let result = store
        .update("orders", "missing", record(json!({"status": "shipped"})))
        .await;
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[tokio::test]
#[serial]
async fn delete_is_idempotent() {
    let store = get_test_store().await;

    let id = store.create("products", Record::new()).await.unwrap();
    store.delete("products", &id).await.unwrap();
    store.delete("products", &id).await.unwrap();

    assert!(store.get("products", &id).await.unwrap().is_none());
}
