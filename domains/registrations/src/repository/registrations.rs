//! Registration store (Postgres)

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::domain::{
    Participant, ParticipantKey, Registration, RegistrationRequest, RegistrationRow,
    RegistrationStatus,
};
use crate::repository::RegistrationStore;

const PARTICIPANT_COLUMNS: &str = "id, name, email, institution_id, institution, phone, created_at";

const REGISTRATION_COLUMNS: &str = r#"id, participant_id, event_id, competition_ids, status,
       transaction_ref, amount, created_at, updated_at"#;

#[derive(Clone)]
pub struct PgRegistrationStore {
    pool: PgPool,
}

impl PgRegistrationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationStore for PgRegistrationStore {
    async fn find_participant(
        &self,
        key: &ParticipantKey,
    ) -> Result<Option<Participant>, RepositoryError> {
        let row = sqlx::query_as::<_, Participant>(&format!(
            r#"
            SELECT {PARTICIPANT_COLUMNS} FROM participants
            WHERE email = $1 AND institution_id = $2 AND institution = $3
            "#
        ))
        .bind(&key.email)
        .bind(&key.institution_id)
        .bind(&key.institution)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_participant(
        &self,
        request: &RegistrationRequest,
    ) -> Result<Participant, RepositoryError> {
        let row = sqlx::query_as::<_, Participant>(&format!(
            r#"
            INSERT INTO participants (id, name, email, institution_id, institution, phone,
                                      created_at)
            VALUES (gen_random_uuid(), $1, $2, $3, $4, $5, NOW())
            RETURNING {PARTICIPANT_COLUMNS}
            "#
        ))
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.institution_id)
        .bind(&request.institution)
        .bind(&request.phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn has_registration(
        &self,
        participant_id: Uuid,
        event_id: Uuid,
    ) -> Result<bool, RepositoryError> {
        let row: Option<(Uuid,)> = sqlx::query_as(
            "SELECT id FROM registrations WHERE participant_id = $1 AND event_id = $2 LIMIT 1",
        )
        .bind(participant_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }

    async fn insert_registration(
        &self,
        participant_id: Uuid,
        request: &RegistrationRequest,
    ) -> Result<Registration, RepositoryError> {
        let row = sqlx::query_as::<_, Registration>(&format!(
            r#"
            INSERT INTO registrations (id, participant_id, event_id, competition_ids, status,
                                       transaction_ref, amount, created_at, updated_at)
            VALUES (gen_random_uuid(), $1, $2, $3, 'pending', $4, $5, NOW(), NOW())
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(participant_id)
        .bind(request.event_id)
        .bind(&request.competition_ids)
        .bind(&request.transaction_ref)
        .bind(request.amount)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_registration(&self, id: Uuid) -> Result<Option<Registration>, RepositoryError> {
        let row = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<RegistrationRow>, RepositoryError> {
        let rows = sqlx::query_as::<_, RegistrationRow>(
            r#"
            SELECT r.id, r.participant_id, r.event_id, r.competition_ids, r.status,
                   r.transaction_ref, r.amount, r.created_at, r.updated_at,
                   p.name AS participant_name, p.email AS participant_email,
                   p.institution AS participant_institution
            FROM registrations r
            JOIN participants p ON p.id = r.participant_id
            WHERE r.event_id = $1
            ORDER BY r.created_at ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_for_participant_event(
        &self,
        key: &ParticipantKey,
        event_id: Uuid,
    ) -> Result<Vec<Registration>, RepositoryError> {
        let rows = sqlx::query_as::<_, Registration>(
            r#"
            SELECT r.id, r.participant_id, r.event_id, r.competition_ids, r.status,
                   r.transaction_ref, r.amount, r.created_at, r.updated_at
            FROM registrations r
            JOIN participants p ON p.id = r.participant_id
            WHERE p.email = $1 AND p.institution_id = $2 AND p.institution = $3
              AND r.event_id = $4
            ORDER BY r.created_at ASC
            "#,
        )
        .bind(&key.email)
        .bind(&key.institution_id)
        .bind(&key.institution)
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: RegistrationStatus,
    ) -> Result<Registration, RepositoryError> {
        let row = sqlx::query_as::<_, Registration>(&format!(
            r#"
            UPDATE registrations
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {REGISTRATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;
        Ok(row)
    }

    async fn set_status_for_participant_event(
        &self,
        participant_id: Uuid,
        event_id: Uuid,
        status: RegistrationStatus,
    ) -> Result<u64, RepositoryError> {
        // One filtered statement; the bulk move cannot partially apply.
        let result = sqlx::query(
            r#"
            UPDATE registrations
            SET status = $3, updated_at = NOW()
            WHERE participant_id = $1 AND event_id = $2
            "#,
        )
        .bind(participant_id)
        .bind(event_id)
        .bind(status)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
