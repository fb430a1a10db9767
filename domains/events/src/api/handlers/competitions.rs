//! Competition API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use clubdesk_auth::MaybeAuthUser;
use clubdesk_common::{ActionResult, Result};

use crate::actions;
use crate::api::middleware::EventsApiState;
use crate::domain::{Competition, CompetitionDraft, CompetitionOrder};

/// Full display-order reassignment for one event's competitions.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<CompetitionOrder>,
}

/// List an event's competitions in display order
///
/// **GET /v1/events/{event_id}/competitions**
pub async fn list_competitions(
    State(state): State<EventsApiState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<Competition>>> {
    let competitions = actions::list_competitions(&state.events, event_id).await?;
    Ok(Json(competitions))
}

/// Create a competition
///
/// **POST /v1/competitions**
pub async fn create_competition(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<EventsApiState>,
    Json(draft): Json<CompetitionDraft>,
) -> ActionResult<Competition> {
    actions::create_competition(&state.events, &session, draft).await
}

/// Update a competition
///
/// **PATCH /v1/competitions/{id}**
pub async fn update_competition(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<EventsApiState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<CompetitionDraft>,
) -> ActionResult<Competition> {
    actions::update_competition(&state.events, &session, id, draft).await
}

/// Delete a competition
///
/// **DELETE /v1/competitions/{id}**
pub async fn delete_competition(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<EventsApiState>,
    Path(id): Path<Uuid>,
) -> ActionResult<()> {
    actions::delete_competition(&state.events, &session, id).await
}

/// Toggle a competition's publish flag
///
/// **POST /v1/competitions/{id}/toggle**
pub async fn toggle_competition_status(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<EventsApiState>,
    Path(id): Path<Uuid>,
) -> ActionResult<Competition> {
    actions::toggle_competition_status(&state.events, &session, id).await
}

/// Reassign the display order of an event's competitions
///
/// **PUT /v1/events/{event_id}/competitions/order**
pub async fn update_competition_order(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<EventsApiState>,
    Path(event_id): Path<Uuid>,
    Json(request): Json<ReorderRequest>,
) -> ActionResult<()> {
    actions::update_competition_order(&state.events, &session, event_id, request.items).await
}
