//! Resource store (Postgres)

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::domain::{Resource, ResourceDraft};
use crate::repository::ResourceStore;

const RESOURCE_COLUMNS: &str =
    "id, title, category, status, is_featured, resource_url, created_at, updated_at";

#[derive(Clone)]
pub struct PgResourceStore {
    pool: PgPool,
}

impl PgResourceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceStore for PgResourceStore {
    async fn list(&self) -> Result<Vec<Resource>, RepositoryError> {
        let rows = sqlx::query_as::<_, Resource>(&format!(
            "SELECT {RESOURCE_COLUMNS} FROM resources ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_published(&self) -> Result<Vec<Resource>, RepositoryError> {
        let rows = sqlx::query_as::<_, Resource>(&format!(
            r#"
            SELECT {RESOURCE_COLUMNS} FROM resources
            WHERE status = 'published'
            ORDER BY is_featured DESC, created_at DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Resource>, RepositoryError> {
        let row = sqlx::query_as::<_, Resource>(&format!(
            "SELECT {RESOURCE_COLUMNS} FROM resources WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, draft: &ResourceDraft) -> Result<Resource, RepositoryError> {
        let row = sqlx::query_as::<_, Resource>(&format!(
            r#"
            INSERT INTO resources (id, title, category, status, is_featured, resource_url,
                                   created_at, updated_at)
            VALUES (gen_random_uuid(), $1, $2, 'pending', FALSE, $3, NOW(), NOW())
            RETURNING {RESOURCE_COLUMNS}
            "#
        ))
        .bind(&draft.title)
        .bind(&draft.category)
        .bind(&draft.resource_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, draft: &ResourceDraft) -> Result<Resource, RepositoryError> {
        let row = sqlx::query_as::<_, Resource>(&format!(
            r#"
            UPDATE resources
            SET title = $2, category = $3, resource_url = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING {RESOURCE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.category)
        .bind(&draft.resource_url)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn toggle_status(&self, id: Uuid) -> Result<Resource, RepositoryError> {
        let row = sqlx::query_as::<_, Resource>(&format!(
            r#"
            UPDATE resources
            SET status = CASE status
                    WHEN 'pending'::resource_status THEN 'published'::resource_status
                    ELSE 'pending'::resource_status
                END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {RESOURCE_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;
        Ok(row)
    }

    async fn toggle_featured(&self, id: Uuid) -> Result<Resource, RepositoryError> {
        let row = sqlx::query_as::<_, Resource>(&format!(
            r#"
            UPDATE resources
            SET is_featured = NOT is_featured, updated_at = NOW()
            WHERE id = $1
            RETURNING {RESOURCE_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;
        Ok(row)
    }
}
