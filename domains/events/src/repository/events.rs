//! Event store (Postgres)

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::domain::{Event, EventDraft};
use crate::repository::EventStore;

const EVENT_COLUMNS: &str = r#"id, title, description, starts_at, ends_at, venue, mode,
       event_type, registration_deadline, poster_url, tags, is_published,
       created_by, created_at, updated_at"#;

#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn list(&self) -> Result<Vec<Event>, RepositoryError> {
        let rows = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY starts_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_published(&self) -> Result<Vec<Event>, RepositoryError> {
        let rows = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE is_published ORDER BY starts_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Event>, RepositoryError> {
        let row = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, created_by: Uuid, draft: &EventDraft) -> Result<Event, RepositoryError> {
        let row = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (id, title, description, starts_at, ends_at, venue, mode,
                                event_type, registration_deadline, poster_url, tags,
                                is_published, created_by, created_at, updated_at)
            VALUES (gen_random_uuid(), $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    FALSE, $11, NOW(), NOW())
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.starts_at)
        .bind(draft.ends_at)
        .bind(&draft.venue)
        .bind(draft.mode)
        .bind(&draft.event_type)
        .bind(draft.registration_deadline)
        .bind(&draft.poster_url)
        .bind(&draft.tags)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, draft: &EventDraft) -> Result<Event, RepositoryError> {
        let row = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET title = $2, description = $3, starts_at = $4, ends_at = $5, venue = $6,
                mode = $7, event_type = $8, registration_deadline = $9, poster_url = $10,
                tags = $11, updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.starts_at)
        .bind(draft.ends_at)
        .bind(&draft.venue)
        .bind(draft.mode)
        .bind(&draft.event_type)
        .bind(draft.registration_deadline)
        .bind(&draft.poster_url)
        .bind(&draft.tags)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn toggle_published(&self, id: Uuid) -> Result<Event, RepositoryError> {
        let row = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET is_published = NOT is_published, updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;
        Ok(row)
    }
}
