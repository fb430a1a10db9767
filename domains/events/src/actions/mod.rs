//! Mutation actions for events and competitions.
//!
//! Every privileged action follows the same shape: check the session,
//! call the store, map repository failures, then fire cache
//! revalidation for the affected public pages. Store calls never
//! happen before the permission check passes.

mod competitions;
mod events;

pub use competitions::*;
pub use events::*;

use std::sync::Arc;

use clubdesk_revalidate::SharedRevalidator;

use crate::repository::{CompetitionStore, EventStore};

/// Public pages refreshed after event-side mutations.
pub const EVENTS_PATH: &str = "/events";
pub const ADMIN_EVENTS_PATH: &str = "/admin/events";

pub fn event_detail_path(event_id: uuid::Uuid) -> String {
    format!("/events/{event_id}")
}

/// Shared dependencies for the events domain.
#[derive(Clone)]
pub struct EventsState {
    pub events: Arc<dyn EventStore>,
    pub competitions: Arc<dyn CompetitionStore>,
    pub revalidator: SharedRevalidator,
}

impl EventsState {
    pub fn new(
        events: Arc<dyn EventStore>,
        competitions: Arc<dyn CompetitionStore>,
        revalidator: SharedRevalidator,
    ) -> Self {
        Self {
            events,
            competitions,
            revalidator,
        }
    }
}
