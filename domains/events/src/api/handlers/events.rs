//! Event API handlers
//!
//! Mutation handlers resolve the session with `MaybeAuthUser` and hand
//! it to the action layer; the action template owns the authorization
//! outcome and the envelope.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use clubdesk_auth::{ElevatedUser, MaybeAuthUser};
use clubdesk_common::{ActionResult, Result};

use crate::actions;
use crate::api::middleware::EventsApiState;
use crate::domain::{Event, EventDraft};

/// List published events
///
/// **GET /v1/events**
pub async fn list_events(State(state): State<EventsApiState>) -> Result<Json<Vec<Event>>> {
    let events = actions::list_published_events(&state.events).await?;
    Ok(Json(events))
}

/// List every event, including unpublished ones
///
/// **GET /v1/admin/events**
pub async fn list_all_events(
    ElevatedUser(session): ElevatedUser,
    State(state): State<EventsApiState>,
) -> Result<Json<Vec<Event>>> {
    let events = actions::list_all_events(&state.events, &session).await?;
    Ok(Json(events))
}

/// Fetch one event
///
/// **GET /v1/events/{id}**
pub async fn get_event(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<EventsApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>> {
    let event = actions::get_event(&state.events, &session, id).await?;
    Ok(Json(event))
}

/// Create an event
///
/// **POST /v1/events**
pub async fn create_event(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<EventsApiState>,
    Json(draft): Json<EventDraft>,
) -> ActionResult<Event> {
    actions::create_event(&state.events, &session, draft).await
}

/// Update an event
///
/// **PATCH /v1/events/{id}**
pub async fn update_event(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<EventsApiState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<EventDraft>,
) -> ActionResult<Event> {
    actions::update_event(&state.events, &session, id, draft).await
}

/// Delete an event
///
/// **DELETE /v1/events/{id}**
pub async fn delete_event(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<EventsApiState>,
    Path(id): Path<Uuid>,
) -> ActionResult<()> {
    actions::delete_event(&state.events, &session, id).await
}

/// Toggle an event's publish flag
///
/// **POST /v1/events/{id}/toggle**
pub async fn toggle_event_status(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<EventsApiState>,
    Path(id): Path<Uuid>,
) -> ActionResult<Event> {
    actions::toggle_event_status(&state.events, &session, id).await
}
