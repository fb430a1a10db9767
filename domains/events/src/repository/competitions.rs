//! Competition store (Postgres)

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::domain::{Competition, CompetitionDraft, CompetitionOrder};
use crate::repository::CompetitionStore;

const COMPETITION_COLUMNS: &str = r#"id, event_id, title, description, fee, display_order,
       is_published, created_at, updated_at"#;

#[derive(Clone)]
pub struct PgCompetitionStore {
    pool: PgPool,
}

impl PgCompetitionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompetitionStore for PgCompetitionStore {
    async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<Competition>, RepositoryError> {
        let rows = sqlx::query_as::<_, Competition>(&format!(
            r#"
            SELECT {COMPETITION_COLUMNS}
            FROM competitions
            WHERE event_id = $1
            ORDER BY display_order ASC
            "#
        ))
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Competition>, RepositoryError> {
        let row = sqlx::query_as::<_, Competition>(&format!(
            "SELECT {COMPETITION_COLUMNS} FROM competitions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, draft: &CompetitionDraft) -> Result<Competition, RepositoryError> {
        // Appends at the dense tail of the event's order.
        let row = sqlx::query_as::<_, Competition>(&format!(
            r#"
            INSERT INTO competitions (id, event_id, title, description, fee, display_order,
                                      is_published, created_at, updated_at)
            SELECT gen_random_uuid(), $1, $2, $3, $4,
                   COALESCE(MAX(display_order) + 1, 0), FALSE, NOW(), NOW()
            FROM competitions WHERE event_id = $1
            RETURNING {COMPETITION_COLUMNS}
            "#
        ))
        .bind(draft.event_id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.fee)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: &CompetitionDraft,
    ) -> Result<Competition, RepositoryError> {
        let row = sqlx::query_as::<_, Competition>(&format!(
            r#"
            UPDATE competitions
            SET title = $2, description = $3, fee = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING {COMPETITION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.fee)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM competitions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn toggle_published(&self, id: Uuid) -> Result<Competition, RepositoryError> {
        let row = sqlx::query_as::<_, Competition>(&format!(
            r#"
            UPDATE competitions
            SET is_published = NOT is_published, updated_at = NOW()
            WHERE id = $1
            RETURNING {COMPETITION_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;
        Ok(row)
    }

    async fn reorder(&self, items: &[CompetitionOrder]) -> Result<(), RepositoryError> {
        // One statement for the whole reassignment: siblings are never
        // observable in a half-applied order.
        let ids: Vec<Uuid> = items.iter().map(|i| i.id).collect();
        let orders: Vec<i32> = items.iter().map(|i| i.display_order).collect();

        let result = sqlx::query(
            r#"
            UPDATE competitions AS c
            SET display_order = o.display_order, updated_at = NOW()
            FROM unnest($1::uuid[], $2::int[]) AS o(id, display_order)
            WHERE c.id = o.id
            "#,
        )
        .bind(&ids)
        .bind(&orders)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() != items.len() as u64 {
            return Err(RepositoryError::InvalidData(format!(
                "Reorder matched {} of {} competitions",
                result.rows_affected(),
                items.len()
            )));
        }
        Ok(())
    }
}
