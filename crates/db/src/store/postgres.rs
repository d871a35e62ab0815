//! PostgreSQL JSONB backend.
//!
//! Matching uses JSONB containment (`doc @> $filter`). Filters only carry
//! scalar values, so containment is exact equality per field and inherits
//! JSONB's numeric comparison.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use showtime_core::types::{DbId, Document};

use super::{strip_storage_key, with_storage_key, DocumentStore, InsertOutcome, StoreError};
use crate::collection::Collection;

/// [`DocumentStore`] backed by one JSONB table per collection.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find(
        &self,
        collection: Collection,
        filter: &Document,
    ) -> Result<Vec<Document>, StoreError> {
        let query = format!(
            "SELECT id, doc FROM {} WHERE doc @> $1 ORDER BY id",
            collection.table_name()
        );
        let rows = sqlx::query_as::<_, (DbId, Json<Document>)>(&query)
            .bind(Json(filter))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(doc))| with_storage_key(doc, id))
            .collect())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Document,
    ) -> Result<Option<Document>, StoreError> {
        let query = format!(
            "SELECT id, doc FROM {} WHERE doc @> $1 ORDER BY id LIMIT 1",
            collection.table_name()
        );
        let row = sqlx::query_as::<_, (DbId, Json<Document>)>(&query)
            .bind(Json(filter))
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(id, Json(doc))| with_storage_key(doc, id)))
    }

    async fn insert_one(
        &self,
        collection: Collection,
        doc: Document,
    ) -> Result<InsertOutcome, StoreError> {
        let query = format!(
            "INSERT INTO {} (doc) VALUES ($1) RETURNING id",
            collection.table_name()
        );
        let id: DbId = sqlx::query_scalar(&query)
            .bind(Json(strip_storage_key(doc)))
            .fetch_one(&self.pool)
            .await?;

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_ids: vec![id],
        })
    }

    async fn insert_many(
        &self,
        collection: Collection,
        docs: Vec<Document>,
    ) -> Result<InsertOutcome, StoreError> {
        let query = format!(
            "INSERT INTO {} (doc) VALUES ($1) RETURNING id",
            collection.table_name()
        );
        let expected = docs.len();
        let mut inserted_ids = Vec::with_capacity(expected);

        let mut tx = self.pool.begin().await?;
        for doc in docs {
            let id: DbId = sqlx::query_scalar(&query)
                .bind(Json(strip_storage_key(doc)))
                .fetch_one(&mut *tx)
                .await?;
            inserted_ids.push(id);
        }
        tx.commit().await?;

        Ok(InsertOutcome {
            acknowledged: inserted_ids.len() == expected,
            inserted_ids,
        })
    }

    async fn update_one(
        &self,
        collection: Collection,
        filter: &Document,
        patch: &Document,
    ) -> Result<u64, StoreError> {
        let table = collection.table_name();
        let query = format!(
            "UPDATE {table} SET doc = doc || $2
             WHERE id = (SELECT id FROM {table} WHERE doc @> $1 ORDER BY id LIMIT 1)
               AND doc IS DISTINCT FROM doc || $2"
        );
        let result = sqlx::query(&query)
            .bind(Json(filter))
            .bind(Json(strip_storage_key(patch.clone())))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_one(
        &self,
        collection: Collection,
        filter: &Document,
    ) -> Result<u64, StoreError> {
        let table = collection.table_name();
        let query = format!(
            "DELETE FROM {table}
             WHERE id = (SELECT id FROM {table} WHERE doc @> $1 ORDER BY id LIMIT 1)"
        );
        let result = sqlx::query(&query)
            .bind(Json(filter))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
