//! Data-access boundary for the events domain
//!
//! One trait per entity; the Postgres implementations use runtime
//! `sqlx::query_as` and stamp timestamps at the boundary. Store faults
//! surface as `RepositoryError`, never panics.

pub mod competitions;
pub mod events;

use async_trait::async_trait;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::domain::{Competition, CompetitionDraft, CompetitionOrder, Event, EventDraft};

pub use competitions::PgCompetitionStore;
pub use events::PgEventStore;

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, RepositoryError>;
    async fn list_published(&self) -> Result<Vec<Event>, RepositoryError>;
    async fn find(&self, id: Uuid) -> Result<Option<Event>, RepositoryError>;
    async fn insert(&self, created_by: Uuid, draft: &EventDraft) -> Result<Event, RepositoryError>;
    async fn update(&self, id: Uuid, draft: &EventDraft) -> Result<Event, RepositoryError>;
    /// Delete cascades to competitions and registrations at the store
    /// level; not re-validated here.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn toggle_published(&self, id: Uuid) -> Result<Event, RepositoryError>;
}

#[async_trait]
pub trait CompetitionStore: Send + Sync {
    /// Siblings ordered ascending by display_order.
    async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<Competition>, RepositoryError>;
    async fn find(&self, id: Uuid) -> Result<Option<Competition>, RepositoryError>;
    /// Insert appends at the end of the event's order (max + 1, or 0).
    async fn insert(&self, draft: &CompetitionDraft) -> Result<Competition, RepositoryError>;
    async fn update(&self, id: Uuid, draft: &CompetitionDraft)
        -> Result<Competition, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn toggle_published(&self, id: Uuid) -> Result<Competition, RepositoryError>;
    /// Persist a full display-order reassignment as one statement.
    async fn reorder(&self, items: &[CompetitionOrder]) -> Result<(), RepositoryError>;
}
