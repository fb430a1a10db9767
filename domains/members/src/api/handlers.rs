//! Member API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use clubdesk_auth::MaybeAuthUser;
use clubdesk_common::{ActionResult, Result};

use crate::actions;
use crate::api::middleware::MembersApiState;
use crate::domain::{Member, MemberDraft};

/// List the club roster
///
/// **GET /v1/members**
pub async fn list_members(State(state): State<MembersApiState>) -> Result<Json<Vec<Member>>> {
    let members = actions::list_members(&state.members).await?;
    Ok(Json(members))
}

/// Create a roster member
///
/// **POST /v1/members**
pub async fn create_member(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<MembersApiState>,
    Json(draft): Json<MemberDraft>,
) -> ActionResult<Member> {
    actions::create_member(&state.members, &session, draft).await
}

/// Update a roster member
///
/// **PATCH /v1/members/{id}**
pub async fn update_member(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<MembersApiState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<MemberDraft>,
) -> ActionResult<Member> {
    actions::update_member(&state.members, &session, id, draft).await
}

/// Delete a roster member
///
/// **DELETE /v1/members/{id}**
pub async fn delete_member(
    MaybeAuthUser(session): MaybeAuthUser,
    State(state): State<MembersApiState>,
    Path(id): Path<Uuid>,
) -> ActionResult<()> {
    actions::delete_member(&state.members, &session, id).await
}
