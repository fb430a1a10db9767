//! Members domain state and auth backend integration

use axum::extract::FromRef;
use clubdesk_auth::AuthBackend;

use crate::actions::MembersState;

/// Application state for the members domain API
#[derive(Clone)]
pub struct MembersApiState {
    pub members: MembersState,
    pub auth: AuthBackend,
}

impl FromRef<MembersApiState> for AuthBackend {
    fn from_ref(state: &MembersApiState) -> Self {
        state.auth.clone()
    }
}
