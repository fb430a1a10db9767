//! Events domain: events and their orderable competitions

pub mod actions;
pub mod api;
pub mod domain;
pub mod repository;
pub mod testing;

// Re-export domain types at the crate root for convenience
pub use domain::{
    validate_order_submission, Competition, CompetitionDraft, CompetitionOrder, Event, EventDraft,
    EventMode,
};
// Re-export repository types
pub use repository::{CompetitionStore, EventStore, PgCompetitionStore, PgEventStore};

// Re-export action-layer state and API surface
pub use actions::EventsState;
pub use api::{routes, EventsApiState};
