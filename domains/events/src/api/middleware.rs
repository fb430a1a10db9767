//! Events domain state and auth backend integration

use axum::extract::FromRef;
use clubdesk_auth::AuthBackend;

use crate::actions::EventsState;

/// Application state for the events domain API
#[derive(Clone)]
pub struct EventsApiState {
    pub events: EventsState,
    pub auth: AuthBackend,
}

impl FromRef<EventsApiState> for AuthBackend {
    fn from_ref(state: &EventsApiState) -> Self {
        state.auth.clone()
    }
}
