//! Data access boundary for the registrations domain

mod registrations;

pub use registrations::PgRegistrationStore;

use async_trait::async_trait;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::domain::{
    Participant, ParticipantKey, Registration, RegistrationRequest, RegistrationRow,
    RegistrationStatus,
};

/// Store seam for participants and their registrations.
///
/// Participants are only ever touched through the registration flow,
/// so the two live behind one seam.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Look up a participant by identity tuple.
    async fn find_participant(
        &self,
        key: &ParticipantKey,
    ) -> Result<Option<Participant>, RepositoryError>;

    /// Insert a new participant from a submission.
    async fn insert_participant(
        &self,
        request: &RegistrationRequest,
    ) -> Result<Participant, RepositoryError>;

    /// Whether the participant already holds a registration for the event.
    async fn has_registration(
        &self,
        participant_id: Uuid,
        event_id: Uuid,
    ) -> Result<bool, RepositoryError>;

    /// Insert a registration. Stored status is always Pending.
    async fn insert_registration(
        &self,
        participant_id: Uuid,
        request: &RegistrationRequest,
    ) -> Result<Registration, RepositoryError>;

    async fn find_registration(
        &self,
        id: Uuid,
    ) -> Result<Option<Registration>, RepositoryError>;

    /// Review table for one event, participant details joined in.
    async fn list_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<RegistrationRow>, RepositoryError>;

    /// Registrations of one participant identity for one event.
    async fn find_for_participant_event(
        &self,
        key: &ParticipantKey,
        event_id: Uuid,
    ) -> Result<Vec<Registration>, RepositoryError>;

    /// Relabel exactly one registration.
    async fn set_status(
        &self,
        id: Uuid,
        status: RegistrationStatus,
    ) -> Result<Registration, RepositoryError>;

    /// Relabel every registration of a participant for one event in a
    /// single filtered write. Returns the number of rows moved.
    async fn set_status_for_participant_event(
        &self,
        participant_id: Uuid,
        event_id: Uuid,
        status: RegistrationStatus,
    ) -> Result<u64, RepositoryError>;
}
