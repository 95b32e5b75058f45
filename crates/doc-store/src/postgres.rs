use async_trait::async_trait;
use serde_json::Value;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    Result, StoreError,
    document::{Document, DocumentStore, OrderBy, Record, sort_documents},
};

/// PostgreSQL-backed document store implementation.
///
/// All collections share a single `documents` table keyed by collection
/// name plus id, with the record held as JSONB. Listing order is applied
/// in-process so it matches the in-memory implementation exactly.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    /// Creates a new PostgreSQL document store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the given database URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPool::connect(url).await?;
        Ok(Self::new(pool))
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_document(row: PgRow) -> Result<Document> {
        let id: String = row.try_get("id")?;
        let data: Value = row.try_get("data")?;

        match data {
            Value::Object(map) => Ok(Document::new(id, map)),
            other => Err(StoreError::Serialization(serde_json::Error::io(
                std::io::Error::other(format!("document payload is not an object: {other}")),
            ))),
        }
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn list(&self, collection: &str, order_by: OrderBy) -> Result<Vec<Document>> {
        let rows = sqlx::query("SELECT id, data FROM documents WHERE collection = $1")
            .bind(collection)
            .fetch_all(&self.pool)
            .await?;

        let mut documents = rows
            .into_iter()
            .map(Self::row_to_document)
            .collect::<Result<Vec<_>>>()?;

        sort_documents(&mut documents, &order_by);
        Ok(documents)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let row = sqlx::query("SELECT id, data FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_document).transpose()
    }

    async fn create(&self, collection: &str, record: Record) -> Result<String> {
        let id = Uuid::new_v4().simple().to_string();

        sqlx::query("INSERT INTO documents (collection, id, data) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(&id)
            .bind(Value::Object(record))
            .execute(&self.pool)
            .await?;

        tracing::debug!(collection, id = %id, "document created");
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, partial: Record) -> Result<()> {
        // JSONB concatenation gives the same field-wise merge the in-memory
        // store performs.
        let result =
            sqlx::query("UPDATE documents SET data = data || $3 WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id)
                .bind(Value::Object(partial))
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(collection, id));
        }

        tracing::debug!(collection, id, "document updated");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
