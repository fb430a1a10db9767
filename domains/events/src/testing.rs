//! In-memory stores for tests
//!
//! Mutable-state mocks in the style of the service mocks elsewhere in
//! the workspace. Every write attempt is counted (including failed
//! ones) so tests can assert that denied actions never touch the
//! boundary.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::domain::{Competition, CompetitionDraft, CompetitionOrder, Event, EventDraft};
use crate::repository::{CompetitionStore, EventStore};

fn simulated_failure() -> RepositoryError {
    RepositoryError::InvalidData("simulated store failure".to_string())
}

/// Recording in-memory event store.
#[derive(Default)]
pub struct MockEventStore {
    events: Mutex<Vec<Event>>,
    write_calls: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MockEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            ..Self::default()
        }
    }

    /// Number of write operations attempted against this store.
    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent write fail, to exercise error propagation.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn record_write(&self) -> Result<(), RepositoryError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(simulated_failure());
        }
        Ok(())
    }

    /// Build a persisted-looking event for seeding tests.
    pub fn make_event(draft: &EventDraft, created_by: Uuid) -> Event {
        let now = Utc::now();
        Event {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            starts_at: draft.starts_at,
            ends_at: draft.ends_at,
            venue: draft.venue.clone(),
            mode: draft.mode,
            event_type: draft.event_type.clone(),
            registration_deadline: draft.registration_deadline,
            poster_url: draft.poster_url.clone(),
            tags: draft.tags.clone(),
            is_published: false,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl EventStore for MockEventStore {
    async fn list(&self) -> Result<Vec<Event>, RepositoryError> {
        Ok(self.events.lock().expect("lock poisoned").clone())
    }

    async fn list_published(&self) -> Result<Vec<Event>, RepositoryError> {
        Ok(self
            .events
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|e| e.is_published)
            .cloned()
            .collect())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Event>, RepositoryError> {
        Ok(self
            .events
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn insert(&self, created_by: Uuid, draft: &EventDraft) -> Result<Event, RepositoryError> {
        self.record_write()?;
        let event = Self::make_event(draft, created_by);
        self.events.lock().expect("lock poisoned").push(event.clone());
        Ok(event)
    }

    async fn update(&self, id: Uuid, draft: &EventDraft) -> Result<Event, RepositoryError> {
        self.record_write()?;
        let mut events = self.events.lock().expect("lock poisoned");
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RepositoryError::NotFound)?;
        event.title = draft.title.clone();
        event.description = draft.description.clone();
        event.starts_at = draft.starts_at;
        event.ends_at = draft.ends_at;
        event.venue = draft.venue.clone();
        event.mode = draft.mode;
        event.event_type = draft.event_type.clone();
        event.registration_deadline = draft.registration_deadline;
        event.poster_url = draft.poster_url.clone();
        event.tags = draft.tags.clone();
        event.updated_at = Utc::now();
        Ok(event.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.record_write()?;
        let mut events = self.events.lock().expect("lock poisoned");
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn toggle_published(&self, id: Uuid) -> Result<Event, RepositoryError> {
        self.record_write()?;
        let mut events = self.events.lock().expect("lock poisoned");
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RepositoryError::NotFound)?;
        event.is_published = !event.is_published;
        event.updated_at = Utc::now();
        Ok(event.clone())
    }
}

/// Recording in-memory competition store.
#[derive(Default)]
pub struct MockCompetitionStore {
    competitions: Mutex<Vec<Competition>>,
    write_calls: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MockCompetitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_competitions(competitions: Vec<Competition>) -> Self {
        Self {
            competitions: Mutex::new(competitions),
            ..Self::default()
        }
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
            return Err(simulated_failure());
        }
        Ok(())
    }

    pub fn make_competition(draft: &CompetitionDraft, display_order: i32) -> Competition {
        let now = Utc::now();
        Competition {
            id: Uuid::new_v4(),
            event_id: draft.event_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            fee: draft.fee,
            display_order,
            is_published: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl CompetitionStore for MockCompetitionStore {
    async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<Competition>, RepositoryError> {
        let mut rows: Vec<Competition> = self
            .competitions
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|c| c.event_id == event_id)
            .cloned()
            .collect();
        rows.sort_by_key(|c| c.display_order);
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Competition>, RepositoryError> {
        Ok(self
            .competitions
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn insert(&self, draft: &CompetitionDraft) -> Result<Competition, RepositoryError> {
        self.record_write()?;
        let mut competitions = self.competitions.lock().expect("lock poisoned");
        let next_order = competitions
            .iter()
            .filter(|c| c.event_id == draft.event_id)
            .map(|c| c.display_order + 1)
            .max()
            .unwrap_or(0);
        let competition = Self::make_competition(draft, next_order);
        competitions.push(competition.clone());
        Ok(competition)
    }

    async fn update(
        &self,
        id: Uuid,
        draft: &CompetitionDraft,
    ) -> Result<Competition, RepositoryError> {
        self.record_write()?;
        let mut competitions = self.competitions.lock().expect("lock poisoned");
        let competition = competitions
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;
        competition.title = draft.title.clone();
        competition.description = draft.description.clone();
        competition.fee = draft.fee;
        competition.updated_at = Utc::now();
        Ok(competition.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.record_write()?;
        let mut competitions = self.competitions.lock().expect("lock poisoned");
        let before = competitions.len();
        competitions.retain(|c| c.id != id);
        if competitions.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn toggle_published(&self, id: Uuid) -> Result<Competition, RepositoryError> {
        self.record_write()?;
        let mut competitions = self.competitions.lock().expect("lock poisoned");
        let competition = competitions
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;
        competition.is_published = !competition.is_published;
        competition.updated_at = Utc::now();
        Ok(competition.clone())
    }

    async fn reorder(&self, items: &[CompetitionOrder]) -> Result<(), RepositoryError> {
        self.record_write()?;
        let mut competitions = self.competitions.lock().expect("lock poisoned");
        for item in items {
            let competition = competitions
                .iter_mut()
                .find(|c| c.id == item.id)
                .ok_or(RepositoryError::NotFound)?;
            competition.display_order = item.display_order;
            competition.updated_at = Utc::now();
        }
        Ok(())
    }
}
