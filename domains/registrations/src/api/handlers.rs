//! Registration API handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use clubdesk_auth::{ElevatedUser, MaybeAuthUser};
use clubdesk_common::{ActionResult, Result};

use crate::actions;
use crate::api::middleware::RegistrationsApiState;
use crate::domain::{
    ParticipantKey, Registration, RegistrationRequest, RegistrationRow, RegistrationStatus,
};

/// Submit a registration
///
/// **POST /v1/registrations**
pub async fn register_for_event(
    State(state): State<RegistrationsApiState>,
    Json(request): Json<RegistrationRequest>,
) -> ActionResult<Registration> {
    actions::register_for_event(&state.registrations, request).await
}

/// Identity tuple for the self-service status lookup.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub email: String,
    pub institution_id: String,
    pub institution: String,
    pub event_id: Uuid,
}

/// Look up the caller's registration statuses for an event
///
/// **GET /v1/registrations/status**
pub async fn get_registration_status(
    State(state): State<RegistrationsApiState>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Vec<Registration>>> {
    let key = ParticipantKey {
        email: query.email,
        institution_id: query.institution_id,
        institution: query.institution,
    };
    let registrations =
        actions::get_registration_status(&state.registrations, &key, query.event_id).await?;
    Ok(Json(registrations))
}

/// Review table for one event
///
/// **GET /v1/admin/events/{event_id}/registrations**
pub async fn list_event_registrations(
    ElevatedUser(session): ElevatedUser,
    State(state): State<RegistrationsApiState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<RegistrationRow>>> {
    let rows =
        actions::list_event_registrations(&state.registrations, &session, event_id).await?;
    Ok(Json(rows))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: RegistrationStatus,
}

/// Relabel one registration
///
/// **PATCH /v1/registrations/{id}/status**
pub async fn update_participant_status(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<RegistrationsApiState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StatusUpdateRequest>,
) -> ActionResult<Registration> {
    actions::update_participant_status(&state.registrations, &session, id, request.status).await
}

/// Relabel every registration of a participant for one event
///
/// **PATCH /v1/participants/{participant_id}/events/{event_id}/status**
pub async fn update_all_participant_statuses(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<RegistrationsApiState>,
    Path((participant_id, event_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<StatusUpdateRequest>,
) -> ActionResult<u64> {
    actions::update_all_participant_statuses(
        &state.registrations,
        &session,
        participant_id,
        event_id,
        request.status,
    )
    .await
}
