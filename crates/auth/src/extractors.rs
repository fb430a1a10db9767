//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::AuthBackend;
use crate::error::AuthError;
use crate::session::AuthSession;

/// Session extractor that never rejects.
///
/// Missing or invalid credentials yield the anonymous session; the
/// action layer decides whether that is acceptable. Handlers for
/// mutation actions use this so the authentication/authorization
/// errors come from the action template, not the transport.
#[derive(Debug)]
pub struct MaybeAuthUser(pub AuthSession);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);
        let session = backend.resolve(parts.headers.get(AUTHORIZATION)).await;
        Ok(MaybeAuthUser(session))
    }
}

/// Authenticated session extractor (rejects anonymous callers with 401)
#[derive(Debug)]
pub struct AuthUser(pub AuthSession);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let session = backend.authenticate(auth_header).await?;

        Ok(AuthUser(session))
    }
}

/// Elevated session extractor.
///
/// Like `AuthUser` but rejects non-elevated callers with 403. Used for
/// admin-only read surfaces; mutation actions re-check elevation
/// themselves so the gate is enforced even off the HTTP path.
#[derive(Debug)]
pub struct ElevatedUser(pub AuthSession);

impl<S> FromRequestParts<S> for ElevatedUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(session) = AuthUser::from_request_parts(parts, state).await?;

        if !session.is_elevated() {
            return Err(AuthError::InsufficientRole);
        }

        Ok(ElevatedUser(session))
    }
}
