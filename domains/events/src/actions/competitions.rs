//! Competition actions
//!
//! Competitions live under an event and carry a dense zero-based
//! display order per event. Reorder submissions must cover the full
//! sibling set; partial submissions are rejected before any write.

use tracing::info;
use uuid::Uuid;

use clubdesk_auth::AuthSession;
use clubdesk_common::{ActionResult, Error, Result};
use clubdesk_revalidate::revalidate_paths;

use crate::domain::{validate_order_submission, Competition, CompetitionDraft, CompetitionOrder};

use super::{event_detail_path, EventsState, ADMIN_EVENTS_PATH, EVENTS_PATH};

/// List the competitions of an event in display order. Public.
pub async fn list_competitions(
    state: &EventsState,
    event_id: Uuid,
) -> Result<Vec<Competition>> {
    Ok(state.competitions.list_for_event(event_id).await?)
}

/// Create a competition under an event. Privileged.
///
/// The new competition is appended at the end of its event's order.
pub async fn create_competition(
    state: &EventsState,
    session: &AuthSession,
    draft: CompetitionDraft,
) -> ActionResult<Competition> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("create", "competition");
    }

    if let Err(e) = draft.validate() {
        return ActionResult::err(e);
    }

    match state.events.find(draft.event_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return ActionResult::err(Error::NotFound("Event not found".to_string())),
        Err(e) => return ActionResult::err(e.into()),
    }

    let competition = match state.competitions.insert(&draft).await {
        Ok(competition) => competition,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(
        competition_id = %competition.id,
        event_id = %competition.event_id,
        display_order = competition.display_order,
        "Competition created"
    );
    let detail = event_detail_path(competition.event_id);
    revalidate_paths(
        state.revalidator.as_ref(),
        &[EVENTS_PATH, ADMIN_EVENTS_PATH, &detail],
    )
    .await;

    ActionResult::ok(competition, "Competition created successfully")
}

/// Update a competition's fields. Privileged. Display order is not
/// touched here; it changes only through reordering.
pub async fn update_competition(
    state: &EventsState,
    session: &AuthSession,
    competition_id: Uuid,
    draft: CompetitionDraft,
) -> ActionResult<Competition> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("update", "competition");
    }

    if let Err(e) = draft.validate() {
        return ActionResult::err(e);
    }

    let competition = match state.competitions.update(competition_id, &draft).await {
        Ok(competition) => competition,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(competition_id = %competition.id, "Competition updated");
    let detail = event_detail_path(competition.event_id);
    revalidate_paths(
        state.revalidator.as_ref(),
        &[EVENTS_PATH, ADMIN_EVENTS_PATH, &detail],
    )
    .await;

    ActionResult::ok(competition, "Competition updated successfully")
}

/// Delete a competition. Privileged.
pub async fn delete_competition(
    state: &EventsState,
    session: &AuthSession,
    competition_id: Uuid,
) -> ActionResult<()> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("delete", "competition");
    }

    let event_id = match state.competitions.find(competition_id).await {
        Ok(Some(c)) => Some(c.event_id),
        Ok(None) => None,
        Err(e) => return ActionResult::err(e.into()),
    };

    if let Err(e) = state.competitions.delete(competition_id).await {
        return ActionResult::err(e.into());
    }

    info!(competition_id = %competition_id, "Competition deleted");
    match event_id {
        Some(event_id) => {
            let detail = event_detail_path(event_id);
            revalidate_paths(
                state.revalidator.as_ref(),
                &[EVENTS_PATH, ADMIN_EVENTS_PATH, &detail],
            )
            .await;
        }
        None => {
            revalidate_paths(state.revalidator.as_ref(), &[EVENTS_PATH, ADMIN_EVENTS_PATH]).await;
        }
    }

    ActionResult::ok_message("Competition deleted successfully")
}

/// Flip the publish flag of a competition. Privileged.
pub async fn toggle_competition_status(
    state: &EventsState,
    session: &AuthSession,
    competition_id: Uuid,
) -> ActionResult<Competition> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("update", "competition");
    }

    let competition = match state.competitions.toggle_published(competition_id).await {
        Ok(competition) => competition,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(
        competition_id = %competition.id,
        is_published = competition.is_published,
        "Competition publish flag toggled"
    );
    let detail = event_detail_path(competition.event_id);
    revalidate_paths(
        state.revalidator.as_ref(),
        &[EVENTS_PATH, ADMIN_EVENTS_PATH, &detail],
    )
    .await;

    let message = if competition.is_published {
        "Competition published"
    } else {
        "Competition unpublished"
    };
    ActionResult::ok(competition, message)
}

/// Reassign the display order of an event's competitions. Privileged.
///
/// The submission must be a contiguous zero-based permutation covering
/// the event's full competition set; all rows are written in a single
/// statement.
pub async fn update_competition_order(
    state: &EventsState,
    session: &AuthSession,
    event_id: Uuid,
    items: Vec<CompetitionOrder>,
) -> ActionResult<()> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("reorder", "competitions");
    }

    if let Err(e) = validate_order_submission(&items) {
        return ActionResult::err(e);
    }

    let existing = match state.competitions.list_for_event(event_id).await {
        Ok(existing) => existing,
        Err(e) => return ActionResult::err(e.into()),
    };

    if existing.len() != items.len()
        || !items.iter().all(|item| existing.iter().any(|c| c.id == item.id))
    {
        return ActionResult::err(Error::Validation(
            "Order submission must cover every competition of the event".to_string(),
        ));
    }

    if let Err(e) = state.competitions.reorder(&items).await {
        return ActionResult::err(e.into());
    }

    info!(event_id = %event_id, count = items.len(), "Competition order updated");
    let detail = event_detail_path(event_id);
    revalidate_paths(
        state.revalidator.as_ref(),
        &[EVENTS_PATH, ADMIN_EVENTS_PATH, &detail],
    )
    .await;

    ActionResult::ok_message("Competition order updated successfully")
}
