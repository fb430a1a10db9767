//! In-memory registration store for tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::domain::{
    Participant, ParticipantKey, Registration, RegistrationRequest, RegistrationRow,
    RegistrationStatus,
};
use crate::repository::RegistrationStore;

#[derive(Default)]
pub struct MockRegistrationStore {
    participants: Mutex<Vec<Participant>>,
    registrations: Mutex<Vec<Registration>>,
    write_calls: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MockRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn record_write(&self) -> Result<(), RepositoryError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::InvalidData(
                "simulated store failure".to_string(),
            ));
        }
        Ok(())
    }

    /// Snapshot of stored registrations, for assertions.
    pub fn registrations(&self) -> Vec<Registration> {
        self.registrations.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl RegistrationStore for MockRegistrationStore {
    async fn find_participant(
        &self,
        key: &ParticipantKey,
    ) -> Result<Option<Participant>, RepositoryError> {
        Ok(self
            .participants
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|p| p.key() == *key)
            .cloned())
    }

    async fn insert_participant(
        &self,
        request: &RegistrationRequest,
    ) -> Result<Participant, RepositoryError> {
        self.record_write()?;
        let participant = Participant {
            id: Uuid::new_v4(),
            name: request.name.clone(),
            email: request.email.clone(),
            institution_id: request.institution_id.clone(),
            institution: request.institution.clone(),
            phone: request.phone.clone(),
            created_at: Utc::now(),
        };
        self.participants
            .lock()
            .expect("lock poisoned")
            .push(participant.clone());
        Ok(participant)
    }

    async fn has_registration(
        &self,
        participant_id: Uuid,
        event_id: Uuid,
    ) -> Result<bool, RepositoryError> {
        Ok(self
            .registrations
            .lock()
            .expect("lock poisoned")
            .iter()
            .any(|r| r.participant_id == participant_id && r.event_id == event_id))
    }

    async fn insert_registration(
        &self,
        participant_id: Uuid,
        request: &RegistrationRequest,
    ) -> Result<Registration, RepositoryError> {
        self.record_write()?;
        let now = Utc::now();
        let registration = Registration {
            id: Uuid::new_v4(),
            participant_id,
            event_id: request.event_id,
            competition_ids: request.competition_ids.clone(),
            status: RegistrationStatus::Pending,
            transaction_ref: request.transaction_ref.clone(),
            amount: request.amount,
            created_at: now,
            updated_at: now,
        };
        self.registrations
            .lock()
            .expect("lock poisoned")
            .push(registration.clone());
        Ok(registration)
    }

    async fn find_registration(&self, id: Uuid) -> Result<Option<Registration>, RepositoryError> {
        Ok(self
            .registrations
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<RegistrationRow>, RepositoryError> {
        let participants = self.participants.lock().expect("lock poisoned");
        let registrations = self.registrations.lock().expect("lock poisoned");
        let mut rows = Vec::new();
        for r in registrations.iter().filter(|r| r.event_id == event_id) {
            let p = participants
                .iter()
                .find(|p| p.id == r.participant_id)
                .ok_or(RepositoryError::NotFound)?;
            rows.push(RegistrationRow {
                id: r.id,
                participant_id: r.participant_id,
                event_id: r.event_id,
                competition_ids: r.competition_ids.clone(),
                status: r.status,
                transaction_ref: r.transaction_ref.clone(),
                amount: r.amount,
                created_at: r.created_at,
                updated_at: r.updated_at,
                participant_name: p.name.clone(),
                participant_email: p.email.clone(),
                participant_institution: p.institution.clone(),
            });
        }
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(rows)
    }

    async fn find_for_participant_event(
        &self,
        key: &ParticipantKey,
        event_id: Uuid,
    ) -> Result<Vec<Registration>, RepositoryError> {
        let participants = self.participants.lock().expect("lock poisoned");
        let Some(participant) = participants.iter().find(|p| p.key() == *key) else {
            return Ok(Vec::new());
        };
        let mut rows: Vec<Registration> = self
            .registrations
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|r| r.participant_id == participant.id && r.event_id == event_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(rows)
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: RegistrationStatus,
    ) -> Result<Registration, RepositoryError> {
        self.record_write()?;
        let mut registrations = self.registrations.lock().expect("lock poisoned");
        let registration = registrations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RepositoryError::NotFound)?;
        registration.status = status;
        registration.updated_at = Utc::now();
        Ok(registration.clone())
    }

    async fn set_status_for_participant_event(
        &self,
        participant_id: Uuid,
        event_id: Uuid,
        status: RegistrationStatus,
    ) -> Result<u64, RepositoryError> {
        self.record_write()?;
        let mut registrations = self.registrations.lock().expect("lock poisoned");
        let mut moved = 0;
        for r in registrations
            .iter_mut()
            .filter(|r| r.participant_id == participant_id && r.event_id == event_id)
        {
            r.status = status;
            r.updated_at = Utc::now();
            moved += 1;
        }
        Ok(moved)
    }
}
