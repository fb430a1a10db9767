//! Registrations domain state and auth backend integration

use axum::extract::FromRef;
use clubdesk_auth::AuthBackend;

use crate::actions::RegistrationsState;

/// Application state for the registrations domain API
#[derive(Clone)]
pub struct RegistrationsApiState {
    pub registrations: RegistrationsState,
    pub auth: AuthBackend,
}

impl FromRef<RegistrationsApiState> for AuthBackend {
    fn from_ref(state: &RegistrationsApiState) -> Self {
        state.auth.clone()
    }
}
