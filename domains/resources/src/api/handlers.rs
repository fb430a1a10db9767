//! Resource API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use clubdesk_auth::{ElevatedUser, MaybeAuthUser};
use clubdesk_common::{ActionResult, Result};

use crate::actions;
use crate::api::middleware::ResourcesApiState;
use crate::domain::{Resource, ResourceDraft};

/// List published resources, featured first
///
/// **GET /v1/resources**
pub async fn list_resources(
    State(state): State<ResourcesApiState>,
) -> Result<Json<Vec<Resource>>> {
    let resources = actions::list_published_resources(&state.resources).await?;
    Ok(Json(resources))
}

/// List every resource, including pending ones
///
/// **GET /v1/admin/resources**
pub async fn list_all_resources(
    ElevatedUser(session): ElevatedUser,
    State(state): State<ResourcesApiState>,
) -> Result<Json<Vec<Resource>>> {
    let resources = actions::list_all_resources(&state.resources, &session).await?;
    Ok(Json(resources))
}

/// Create a resource
///
/// **POST /v1/resources**
pub async fn create_resource(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<ResourcesApiState>,
    Json(draft): Json<ResourceDraft>,
) -> ActionResult<Resource> {
    actions::create_resource(&state.resources, &session, draft).await
}

/// Update a resource
///
/// **PATCH /v1/resources/{id}**
pub async fn update_resource(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<ResourcesApiState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<ResourceDraft>,
) -> ActionResult<Resource> {
    actions::update_resource(&state.resources, &session, id, draft).await
}

/// Delete a resource
///
/// **DELETE /v1/resources/{id}**
pub async fn delete_resource(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<ResourcesApiState>,
    Path(id): Path<Uuid>,
) -> ActionResult<()> {
    actions::delete_resource(&state.resources, &session, id).await
}

/// Toggle a resource between pending and published
///
/// **POST /v1/resources/{id}/toggle-status**
pub async fn toggle_resource_status(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<ResourcesApiState>,
    Path(id): Path<Uuid>,
) -> ActionResult<Resource> {
    actions::toggle_resource_status(&state.resources, &session, id).await
}

/// Toggle a resource's featured flag
///
/// **POST /v1/resources/{id}/toggle-featured**
pub async fn toggle_resource_featured(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<ResourcesApiState>,
    Path(id): Path<Uuid>,
) -> ActionResult<Resource> {
    actions::toggle_resource_featured(&state.resources, &session, id).await
}
