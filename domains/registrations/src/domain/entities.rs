//! Domain entities for the Clubdesk registrations domain
//!
//! Participants are outside people identified by (email,
//! institution_id, institution); they need no platform profile. A
//! participant may hold several registrations per event (different
//! competition bundles, separate payments).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use clubdesk_common::{Error, Result};

use super::state::RegistrationStatus;

/// Participant entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Participant {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub institution_id: String,
    pub institution: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The identity tuple participants are deduplicated by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantKey {
    pub email: String,
    pub institution_id: String,
    pub institution: String,
}

impl Participant {
    pub fn key(&self) -> ParticipantKey {
        ParticipantKey {
            email: self.email.clone(),
            institution_id: self.institution_id.clone(),
            institution: self.institution.clone(),
        }
    }
}

/// Registration entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Registration {
    pub id: Uuid,
    pub participant_id: Uuid,
    pub event_id: Uuid,
    pub competition_ids: Vec<Uuid>,
    pub status: RegistrationStatus,
    pub transaction_ref: Option<String>,
    pub amount: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Self-service registration submission.
///
/// Whatever status the caller might smuggle in is ignored: the stored
/// registration always starts at Pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 60))]
    pub institution_id: String,
    #[validate(length(min = 1, max = 200))]
    pub institution: String,
    pub phone: Option<String>,
    pub event_id: Uuid,
    pub competition_ids: Vec<Uuid>,
    pub transaction_ref: Option<String>,
    pub amount: Option<Decimal>,
}

impl RegistrationRequest {
    pub fn validate_request(&self) -> Result<()> {
        self.validate()
            .map_err(|e| Error::Validation(e.to_string()))?;

        if self.competition_ids.is_empty() {
            return Err(Error::Validation(
                "Registration must select at least one competition".to_string(),
            ));
        }

        if let Some(amount) = self.amount {
            if amount < Decimal::ZERO {
                return Err(Error::Validation(
                    "Registration amount cannot be negative".to_string(),
                ));
            }
        }

        Ok(())
    }

    pub fn participant_key(&self) -> ParticipantKey {
        ParticipantKey {
            email: self.email.clone(),
            institution_id: self.institution_id.clone(),
            institution: self.institution.clone(),
        }
    }
}

/// Behavior toggles for the self-service registration flow.
///
/// `reject_duplicates` refuses a second registration for the same
/// (participant identity, event) pair. Off by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationPolicy {
    pub reject_duplicates: bool,
}

/// Registration joined with its participant, for the review table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RegistrationRow {
    pub id: Uuid,
    pub participant_id: Uuid,
    pub event_id: Uuid,
    pub competition_ids: Vec<Uuid>,
    pub status: RegistrationStatus,
    pub transaction_ref: Option<String>,
    pub amount: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub participant_name: String,
    pub participant_email: String,
    pub participant_institution: String,
}
