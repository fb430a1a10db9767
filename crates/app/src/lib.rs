//! Clubdesk application composition root
//!
//! Composes all domain routers into a single application.

use std::sync::Arc;

use axum::{extract::State, Json, Router};
use serde::Serialize;
use sqlx::PgPool;

use clubdesk_auth::{AuthBackend, AuthConfig, AuthUser, Identity, Profile};
use clubdesk_common::{Config, Error, Result};
use clubdesk_events::{EventsApiState, EventsState, PgCompetitionStore, PgEventStore};
use clubdesk_members::{MembersApiState, MembersState, PgMemberStore};
use clubdesk_registrations::{
    PgRegistrationStore, RegistrationPolicy, RegistrationsApiState, RegistrationsState,
};
use clubdesk_resources::{PgResourceStore, ResourcesApiState, ResourcesState};
use clubdesk_revalidate::{HttpRevalidator, NoopRevalidator, SharedRevalidator};

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> anyhow::Result<Router> {
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        issuer: config.jwt_issuer.clone(),
        audience: config.jwt_audience.clone(),
    };
    let auth = AuthBackend::new(pool.clone(), auth_config);

    // Without a configured endpoint, revalidation degrades to a no-op.
    let revalidator: SharedRevalidator = match &config.revalidate_url {
        Some(url) => Arc::new(HttpRevalidator::new(
            url.clone(),
            config.revalidate_secret.clone(),
        )),
        None => Arc::new(NoopRevalidator),
    };

    let events_state = EventsApiState {
        events: EventsState::new(
            Arc::new(PgEventStore::new(pool.clone())),
            Arc::new(PgCompetitionStore::new(pool.clone())),
            revalidator.clone(),
        ),
        auth: auth.clone(),
    };

    let members_state = MembersApiState {
        members: MembersState::new(Arc::new(PgMemberStore::new(pool.clone())), revalidator.clone()),
        auth: auth.clone(),
    };

    let resources_state = ResourcesApiState {
        resources: ResourcesState::new(
            Arc::new(PgResourceStore::new(pool.clone())),
            revalidator.clone(),
        ),
        auth: auth.clone(),
    };

    let registrations_state = RegistrationsApiState {
        registrations: RegistrationsState::new(
            Arc::new(PgRegistrationStore::new(pool)),
            RegistrationPolicy {
                reject_duplicates: config.reject_duplicate_registrations,
            },
            revalidator,
        ),
        auth: auth.clone(),
    };

    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Clubdesk API" }))
        .merge(auth_routes().with_state(auth))
        .merge(clubdesk_events::routes().with_state(events_state))
        .merge(clubdesk_members::routes().with_state(members_state))
        .merge(clubdesk_resources::routes().with_state(resources_state))
        .merge(clubdesk_registrations::routes().with_state(registrations_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

fn auth_routes() -> Router<AuthBackend> {
    Router::new()
        .route("/v1/auth/me", axum::routing::get(whoami))
        .route("/v1/auth/sync", axum::routing::post(sync_profile))
}

/// Resolved caller view returned by the whoami endpoint.
#[derive(Debug, Serialize)]
struct WhoamiResponse {
    identity: Identity,
    profile: Option<Profile>,
}

/// Who the caller is, per the presented credential
///
/// **GET /v1/auth/me**
async fn whoami(AuthUser(session): AuthUser) -> Result<Json<WhoamiResponse>> {
    let identity = session.identity.ok_or(Error::AuthRequired)?;
    Ok(Json(WhoamiResponse {
        identity,
        profile: session.profile,
    }))
}

/// Provision the caller's profile on first login, or return the
/// existing one
///
/// **POST /v1/auth/sync**
async fn sync_profile(
    AuthUser(session): AuthUser,
    State(auth): State<AuthBackend>,
) -> Result<Json<Profile>> {
    let identity = session.identity.ok_or(Error::AuthRequired)?;
    let profile = auth.ensure_profile(&identity).await?;
    Ok(Json(profile))
}
