//! Per-request authorization context
//!
//! The session is resolved once per inbound request and passed
//! explicitly into every action invocation. There is no session-level
//! cache of elevation: `is_elevated` re-reads the profile role on
//! every call, so a revoked role takes effect on the next action.

use crate::types::{Identity, Profile};

/// Resolved caller context: identity plus platform profile.
///
/// Three meaningful shapes:
/// - `{None, None}` — anonymous (or resolution fault, degraded)
/// - `{Some, None}` — authenticated but not fully onboarded
/// - `{Some, Some}` — fully resolved member of the platform
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    pub identity: Option<Identity>,
    pub profile: Option<Profile>,
}

impl AuthSession {
    /// The anonymous session: no identity, no profile.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(identity: Identity, profile: Option<Profile>) -> Self {
        Self {
            identity: Some(identity),
            profile,
        }
    }

    /// A resolvable identity exists.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Identity resolved and profile role is admin or executive.
    ///
    /// Stateless predicate; a profile with no role data or an absent
    /// profile is never elevated.
    pub fn is_elevated(&self) -> bool {
        self.profile
            .as_ref()
            .map(|p| p.role.is_elevated())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use chrono::Utc;
    use uuid::Uuid;

    fn identity() -> Identity {
        Identity {
            id: Uuid::new_v4(),
            email: "caller@club.example".to_string(),
            issued_at: Some(Utc::now()),
        }
    }

    fn profile(id: Uuid, role: Role) -> Profile {
        let now = Utc::now();
        Profile {
            id,
            email: "caller@club.example".to_string(),
            display_name: Some("Caller".to_string()),
            role,
            batch: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_anonymous_session() {
        let session = AuthSession::anonymous();
        assert!(!session.is_authenticated());
        assert!(!session.is_elevated());
    }

    #[test]
    fn test_onboarding_gap_is_authenticated_but_not_elevated() {
        let session = AuthSession::new(identity(), None);
        assert!(session.is_authenticated());
        assert!(!session.is_elevated());
    }

    #[test]
    fn test_member_is_not_elevated() {
        let id = identity();
        let session = AuthSession::new(id.clone(), Some(profile(id.id, Role::Member)));
        assert!(session.is_authenticated());
        assert!(!session.is_elevated());
    }

    #[test]
    fn test_admin_and_executive_are_elevated() {
        let id = identity();
        let admin = AuthSession::new(id.clone(), Some(profile(id.id, Role::Admin)));
        assert!(admin.is_elevated());

        let exec = AuthSession::new(id.clone(), Some(profile(id.id, Role::Executive)));
        assert!(exec.is_elevated());
    }

    #[test]
    fn test_role_change_takes_effect_immediately() {
        let id = identity();
        let mut session = AuthSession::new(id.clone(), Some(profile(id.id, Role::Admin)));
        assert!(session.is_elevated());

        // No cached answer: swapping the profile flips the predicate.
        session.profile = Some(profile(id.id, Role::Member));
        assert!(!session.is_elevated());
    }
}
