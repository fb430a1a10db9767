//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns auth-specific SQL queries.
//! Uses runtime `sqlx::query_as` (not macros) consistent with the
//! domain store read pattern.

use axum::http::HeaderValue;
use sqlx::PgPool;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt::{extract_bearer_token, validate_session_token};
use crate::session::AuthSession;
use crate::types::{Identity, Profile};

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Resolve an Authorization header into a session. Never fails:
    /// a missing header, a bad token, or an internal fault all degrade
    /// to the anonymous session.
    pub async fn resolve(&self, header: Option<&HeaderValue>) -> AuthSession {
        let Some(header) = header else {
            return AuthSession::anonymous();
        };
        match self.authenticate(header).await {
            Ok(session) => session,
            Err(e) => {
                tracing::debug!(error = %e, "Session resolution degraded to anonymous");
                AuthSession::anonymous()
            }
        }
    }

    /// Authenticate an Authorization header, failing loudly.
    ///
    /// Used by extractors that must reject unauthenticated callers.
    /// A valid identity with no profile row still authenticates: the
    /// caller is "not fully onboarded", which is distinct from
    /// unauthenticated.
    pub async fn authenticate(&self, header: &HeaderValue) -> Result<AuthSession, AuthError> {
        let token = extract_bearer_token(header)?;
        let claims = validate_session_token(&token, &self.config)?;

        let identity = Identity {
            id: claims.sub,
            email: claims.email.clone(),
            issued_at: claims.issued_at(),
        };

        // Profile lookup faults are internal, not the caller's problem:
        // the session survives with profile = None.
        let profile = match self.find_profile(identity.id).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(error = %e, identity = %identity.id, "Profile lookup failed");
                None
            }
        };

        Ok(AuthSession::new(identity, profile))
    }

    /// Find a profile by identity id. At most one row; "no row" is a
    /// normal outcome, not an error.
    pub async fn find_profile(&self, id: Uuid) -> Result<Option<Profile>, RepositoryError> {
        let profile: Option<Profile> = sqlx::query_as(
            r#"
            SELECT id, email, display_name, role, batch, avatar_url,
                   created_at, updated_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Provision a profile for a freshly logged-in identity if one does
    /// not exist yet. New profiles start with the default member role;
    /// the role is immutable through this path.
    pub async fn ensure_profile(&self, identity: &Identity) -> Result<Profile, RepositoryError> {
        if let Some(existing) = self.find_profile(identity.id).await? {
            return Ok(existing);
        }

        let created: Profile = sqlx::query_as(
            r#"
            INSERT INTO profiles (id, email, display_name, role, batch, avatar_url,
                                  created_at, updated_at)
            VALUES ($1, $2, NULL, 'member', NULL, NULL, NOW(), NOW())
            ON CONFLICT (id) DO UPDATE SET email = EXCLUDED.email, updated_at = NOW()
            RETURNING id, email, display_name, role, batch, avatar_url,
                      created_at, updated_at
            "#,
        )
        .bind(identity.id)
        .bind(&identity.email)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(identity = %identity.id, "Provisioned profile on first login");
        Ok(created)
    }
}
