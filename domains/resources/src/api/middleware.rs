//! Resources domain state and auth backend integration

use axum::extract::FromRef;
use clubdesk_auth::AuthBackend;

use crate::actions::ResourcesState;

/// Application state for the resources domain API
#[derive(Clone)]
pub struct ResourcesApiState {
    pub resources: ResourcesState,
    pub auth: AuthBackend,
}

impl FromRef<ResourcesApiState> for AuthBackend {
    fn from_ref(state: &ResourcesApiState) -> Self {
        state.auth.clone()
    }
}
