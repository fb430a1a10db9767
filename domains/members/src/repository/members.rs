//! Member store (Postgres)

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::domain::{Member, MemberDraft};
use crate::repository::MemberStore;

const MEMBER_COLUMNS: &str =
    "id, name, title, photo_url, category, display_order, created_at, updated_at";

#[derive(Clone)]
pub struct PgMemberStore {
    pool: PgPool,
}

impl PgMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberStore for PgMemberStore {
    async fn list(&self) -> Result<Vec<Member>, RepositoryError> {
        let rows = sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members ORDER BY category ASC, display_order ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Member>, RepositoryError> {
        let row = sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, draft: &MemberDraft) -> Result<Member, RepositoryError> {
        // Appends at the end of the category's order.
        let row = sqlx::query_as::<_, Member>(&format!(
            r#"
            INSERT INTO members (id, name, title, photo_url, category, display_order,
                                 created_at, updated_at)
            SELECT gen_random_uuid(), $1, $2, $3, $4,
                   COALESCE(MAX(display_order) + 1, 0), NOW(), NOW()
            FROM members
            WHERE category = $4
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(&draft.name)
        .bind(&draft.title)
        .bind(&draft.photo_url)
        .bind(&draft.category)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, draft: &MemberDraft) -> Result<Member, RepositoryError> {
        let row = sqlx::query_as::<_, Member>(&format!(
            r#"
            UPDATE members
            SET name = $2, title = $3, photo_url = $4, category = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.title)
        .bind(&draft.photo_url)
        .bind(&draft.category)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
