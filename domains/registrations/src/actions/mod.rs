//! Actions for the registration flow
//!
//! `register_for_event` and `get_registration_status` are the public
//! self-service surface; the status mutations are staff-only review
//! tools.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use clubdesk_auth::AuthSession;
use clubdesk_common::{ActionResult, Error, Result};
use clubdesk_revalidate::{revalidate_paths, SharedRevalidator};

use crate::domain::{
    ParticipantKey, Registration, RegistrationPolicy, RegistrationRequest, RegistrationRow,
    RegistrationStatus,
};
use crate::repository::RegistrationStore;

/// Admin review pages refreshed after registration mutations.
pub const ADMIN_REGISTRATIONS_PATH: &str = "/admin/registrations";

pub fn event_registrations_path(event_id: Uuid) -> String {
    format!("/admin/events/{event_id}/registrations")
}

/// Shared dependencies for the registrations domain.
#[derive(Clone)]
pub struct RegistrationsState {
    pub registrations: Arc<dyn RegistrationStore>,
    pub policy: RegistrationPolicy,
    pub revalidator: SharedRevalidator,
}

impl RegistrationsState {
    pub fn new(
        registrations: Arc<dyn RegistrationStore>,
        policy: RegistrationPolicy,
        revalidator: SharedRevalidator,
    ) -> Self {
        Self {
            registrations,
            policy,
            revalidator,
        }
    }
}

/// Self-service registration. Public: no session required.
///
/// Reuses the participant matching the submission's identity tuple or
/// creates one; the stored registration always starts at Pending.
/// When the duplicate policy is on, a second registration for the
/// same (participant, event) pair is refused as a conflict.
pub async fn register_for_event(
    state: &RegistrationsState,
    request: RegistrationRequest,
) -> ActionResult<Registration> {
    if let Err(e) = request.validate_request() {
        return ActionResult::err(e);
    }

    let key = request.participant_key();
    let participant = match state.registrations.find_participant(&key).await {
        Ok(Some(participant)) => participant,
        Ok(None) => match state.registrations.insert_participant(&request).await {
            Ok(participant) => participant,
            Err(e) => return ActionResult::err(e.into()),
        },
        Err(e) => return ActionResult::err(e.into()),
    };

    if state.policy.reject_duplicates {
        match state
            .registrations
            .has_registration(participant.id, request.event_id)
            .await
        {
            Ok(true) => {
                return ActionResult::err(Error::Conflict(
                    "A registration for this event already exists".to_string(),
                ))
            }
            Ok(false) => {}
            Err(e) => return ActionResult::err(e.into()),
        }
    }

    let registration = match state
        .registrations
        .insert_registration(participant.id, &request)
        .await
    {
        Ok(registration) => registration,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(
        registration_id = %registration.id,
        event_id = %registration.event_id,
        participant_id = %participant.id,
        "Registration received"
    );
    let event_path = event_registrations_path(registration.event_id);
    revalidate_paths(
        state.revalidator.as_ref(),
        &[ADMIN_REGISTRATIONS_PATH, &event_path],
    )
    .await;

    ActionResult::ok(registration, "Registration submitted successfully")
}

/// Statuses of a participant's registrations for one event. Public
/// query for the self-service flow; a read, never a mutation.
pub async fn get_registration_status(
    state: &RegistrationsState,
    key: &ParticipantKey,
    event_id: Uuid,
) -> Result<Vec<Registration>> {
    Ok(state
        .registrations
        .find_for_participant_event(key, event_id)
        .await?)
}

/// Review table for one event. Privileged.
pub async fn list_event_registrations(
    state: &RegistrationsState,
    session: &AuthSession,
    event_id: Uuid,
) -> Result<Vec<RegistrationRow>> {
    if !session.is_authenticated() {
        return Err(Error::AuthRequired);
    }
    if !session.is_elevated() {
        return Err(Error::forbidden("list", "registrations"));
    }

    Ok(state.registrations.list_for_event(event_id).await?)
}

/// Relabel exactly one registration. Privileged.
pub async fn update_participant_status(
    state: &RegistrationsState,
    session: &AuthSession,
    registration_id: Uuid,
    status: RegistrationStatus,
) -> ActionResult<Registration> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("update", "registration");
    }

    let registration = match state.registrations.set_status(registration_id, status).await {
        Ok(registration) => registration,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(
        registration_id = %registration.id,
        status = %registration.status,
        "Registration status updated"
    );
    let event_path = event_registrations_path(registration.event_id);
    revalidate_paths(
        state.revalidator.as_ref(),
        &[ADMIN_REGISTRATIONS_PATH, &event_path],
    )
    .await;

    ActionResult::ok(registration, "Registration status updated")
}

/// Relabel every registration of a participant for one event. The
/// store applies it as one filtered write, so the move cannot
/// partially apply. Privileged.
pub async fn update_all_participant_statuses(
    state: &RegistrationsState,
    session: &AuthSession,
    participant_id: Uuid,
    event_id: Uuid,
    status: RegistrationStatus,
) -> ActionResult<u64> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("update", "registrations");
    }

    let moved = match state
        .registrations
        .set_status_for_participant_event(participant_id, event_id, status)
        .await
    {
        Ok(moved) => moved,
        Err(e) => return ActionResult::err(e.into()),
    };

    if moved == 0 {
        return ActionResult::err(Error::NotFound(
            "No registrations for this participant and event".to_string(),
        ));
    }

    info!(
        participant_id = %participant_id,
        event_id = %event_id,
        status = %status,
        moved,
        "Participant registrations bulk-updated"
    );
    let event_path = event_registrations_path(event_id);
    revalidate_paths(
        state.revalidator.as_ref(),
        &[ADMIN_REGISTRATIONS_PATH, &event_path],
    )
    .await;

    ActionResult::ok(moved, "Registration statuses updated")
}
