//! Event actions

use tracing::info;
use uuid::Uuid;

use clubdesk_auth::AuthSession;
use clubdesk_common::{ActionResult, Error, Result};
use clubdesk_revalidate::revalidate_paths;

use crate::domain::{Event, EventDraft};

use super::{event_detail_path, EventsState, ADMIN_EVENTS_PATH, EVENTS_PATH};

/// List every event, including unpublished ones. Privileged.
pub async fn list_all_events(state: &EventsState, session: &AuthSession) -> Result<Vec<Event>> {
    if !session.is_authenticated() {
        return Err(Error::AuthRequired);
    }
    if !session.is_elevated() {
        return Err(Error::forbidden("list", "events"));
    }

    Ok(state.events.list().await?)
}

/// List published events. Public.
pub async fn list_published_events(state: &EventsState) -> Result<Vec<Event>> {
    Ok(state.events.list_published().await?)
}

/// Fetch a single event by id. Public; unpublished events are visible
/// only to elevated callers.
pub async fn get_event(
    state: &EventsState,
    session: &AuthSession,
    event_id: Uuid,
) -> Result<Event> {
    let event = state
        .events
        .find(event_id)
        .await?
        .ok_or_else(|| Error::NotFound("Event not found".to_string()))?;

    if !event.is_published && !session.is_elevated() {
        return Err(Error::NotFound("Event not found".to_string()));
    }

    Ok(event)
}

/// Create a new event. Privileged.
pub async fn create_event(
    state: &EventsState,
    session: &AuthSession,
    draft: EventDraft,
) -> ActionResult<Event> {
    let identity = match &session.identity {
        Some(identity) => identity,
        None => return ActionResult::auth_required(),
    };
    if !session.is_elevated() {
        return ActionResult::forbidden("create", "event");
    }

    if let Err(e) = draft.validate() {
        return ActionResult::err(e);
    }

    let event = match state.events.insert(identity.id, &draft).await {
        Ok(event) => event,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(event_id = %event.id, title = %event.title, "Event created");
    revalidate_paths(state.revalidator.as_ref(), &[EVENTS_PATH, ADMIN_EVENTS_PATH]).await;

    ActionResult::ok(event, "Event created successfully")
}

/// Update an existing event. Privileged.
pub async fn update_event(
    state: &EventsState,
    session: &AuthSession,
    event_id: Uuid,
    draft: EventDraft,
) -> ActionResult<Event> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("update", "event");
    }

    if let Err(e) = draft.validate() {
        return ActionResult::err(e);
    }

    let event = match state.events.update(event_id, &draft).await {
        Ok(event) => event,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(event_id = %event.id, "Event updated");
    let detail = event_detail_path(event.id);
    revalidate_paths(
        state.revalidator.as_ref(),
        &[EVENTS_PATH, ADMIN_EVENTS_PATH, &detail],
    )
    .await;

    ActionResult::ok(event, "Event updated successfully")
}

/// Delete an event. Privileged.
pub async fn delete_event(
    state: &EventsState,
    session: &AuthSession,
    event_id: Uuid,
) -> ActionResult<()> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("delete", "event");
    }

    if let Err(e) = state.events.delete(event_id).await {
        return ActionResult::err(e.into());
    }

    info!(event_id = %event_id, "Event deleted");
    revalidate_paths(state.revalidator.as_ref(), &[EVENTS_PATH, ADMIN_EVENTS_PATH]).await;

    ActionResult::ok_message("Event deleted successfully")
}

/// Flip the publish flag of an event. Privileged.
pub async fn toggle_event_status(
    state: &EventsState,
    session: &AuthSession,
    event_id: Uuid,
) -> ActionResult<Event> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("update", "event");
    }

    let event = match state.events.toggle_published(event_id).await {
        Ok(event) => event,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(event_id = %event.id, is_published = event.is_published, "Event publish flag toggled");
    let detail = event_detail_path(event.id);
    revalidate_paths(
        state.revalidator.as_ref(),
        &[EVENTS_PATH, ADMIN_EVENTS_PATH, &detail],
    )
    .await;

    let message = if event.is_published {
        "Event published"
    } else {
        "Event unpublished"
    };
    ActionResult::ok(event, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EventMode;
    use crate::testing::{MockCompetitionStore, MockEventStore};
    use chrono::{Duration, Utc};
    use clubdesk_auth::{Identity, Profile, Role};
    use clubdesk_common::ErrorKind;
    use clubdesk_revalidate::MockRevalidator;
    use std::sync::Arc;

    fn draft() -> EventDraft {
        let starts = Utc::now() + Duration::days(14);
        EventDraft {
            title: "Annual General Meeting".to_string(),
            description: None,
            starts_at: starts,
            ends_at: starts + Duration::hours(2),
            venue: Some("Room 101".to_string()),
            mode: EventMode::Offline,
            event_type: "meeting".to_string(),
            registration_deadline: None,
            poster_url: None,
            tags: vec![],
        }
    }

    fn session_with_role(role: Role) -> AuthSession {
        let id = Uuid::new_v4();
        let now = Utc::now();
        AuthSession::new(
            Identity {
                id,
                email: "caller@club.example".to_string(),
                issued_at: Some(now),
            },
            Some(Profile {
                id,
                email: "caller@club.example".to_string(),
                display_name: None,
                role,
                batch: None,
                avatar_url: None,
                created_at: now,
                updated_at: now,
            }),
        )
    }

    struct Fixture {
        state: EventsState,
        events: Arc<MockEventStore>,
        revalidator: Arc<MockRevalidator>,
    }

    fn fixture(events: MockEventStore) -> Fixture {
        let events = Arc::new(events);
        let revalidator = Arc::new(MockRevalidator::new());
        let state = EventsState::new(
            events.clone(),
            Arc::new(MockCompetitionStore::new()),
            revalidator.clone(),
        );
        Fixture {
            state,
            events,
            revalidator,
        }
    }

    #[tokio::test]
    async fn test_anonymous_create_is_rejected_before_any_write() {
        let f = fixture(MockEventStore::new());
        let result = create_event(&f.state, &AuthSession::anonymous(), draft()).await;

        assert!(!result.success);
        assert_eq!(result.error.unwrap().kind, ErrorKind::AuthRequired);
        assert_eq!(f.events.write_calls(), 0);
        assert!(f.revalidator.recorded_paths().is_empty());
    }

    #[tokio::test]
    async fn test_member_create_is_forbidden_before_any_write() {
        let f = fixture(MockEventStore::new());
        let result = create_event(&f.state, &session_with_role(Role::Member), draft()).await;

        let error = result.error.unwrap();
        assert_eq!(error.kind, ErrorKind::Forbidden);
        assert_eq!(error.message, "Insufficient permissions to create event");
        assert_eq!(f.events.write_calls(), 0);
    }

    #[tokio::test]
    async fn test_admin_creates_event_and_revalidates() {
        let f = fixture(MockEventStore::new());
        let result = create_event(&f.state, &session_with_role(Role::Admin), draft()).await;

        assert!(result.success);
        let event = result.data.unwrap();
        assert!(!event.is_published);
        assert!(f.revalidator.was_revalidated(EVENTS_PATH));
        assert!(f.revalidator.was_revalidated(ADMIN_EVENTS_PATH));
    }

    #[tokio::test]
    async fn test_invalid_draft_is_rejected_before_any_write() {
        let f = fixture(MockEventStore::new());
        let mut bad = draft();
        bad.ends_at = bad.starts_at;
        let result = create_event(&f.state, &session_with_role(Role::Executive), bad).await;

        assert_eq!(result.error.unwrap().kind, ErrorKind::Validation);
        assert_eq!(f.events.write_calls(), 0);
        assert!(f.revalidator.recorded_paths().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates_without_revalidation() {
        let f = fixture(MockEventStore::new());
        f.events.fail_writes(true);
        let result = create_event(&f.state, &session_with_role(Role::Admin), draft()).await;

        assert!(!result.success);
        assert!(result.is_consistent());
        assert!(f.revalidator.recorded_paths().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_event_is_not_found() {
        let f = fixture(MockEventStore::new());
        let result = delete_event(&f.state, &session_with_role(Role::Admin), Uuid::new_v4()).await;

        assert_eq!(result.error.unwrap().kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let creator = Uuid::new_v4();
        let event = MockEventStore::make_event(&draft(), creator);
        let event_id = event.id;
        let f = fixture(MockEventStore::with_events(vec![event]));
        let session = session_with_role(Role::Executive);

        let first = delete_event(&f.state, &session, event_id).await;
        assert!(first.success);
        assert!(f.revalidator.was_revalidated(EVENTS_PATH));

        let second = delete_event(&f.state, &session, event_id).await;
        assert_eq!(second.error.unwrap().kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_publish_flag() {
        let event = MockEventStore::make_event(&draft(), Uuid::new_v4());
        let event_id = event.id;
        let f = fixture(MockEventStore::with_events(vec![event]));
        let session = session_with_role(Role::Admin);

        let once = toggle_event_status(&f.state, &session, event_id).await;
        assert!(once.data.as_ref().unwrap().is_published);
        assert_eq!(once.message.as_deref(), Some("Event published"));

        let twice = toggle_event_status(&f.state, &session, event_id).await;
        assert!(!twice.data.as_ref().unwrap().is_published);
        assert_eq!(twice.message.as_deref(), Some("Event unpublished"));
    }

    #[tokio::test]
    async fn test_unpublished_event_is_hidden_from_public_reads() {
        let event = MockEventStore::make_event(&draft(), Uuid::new_v4());
        let event_id = event.id;
        let f = fixture(MockEventStore::with_events(vec![event]));

        assert!(list_published_events(&f.state).await.unwrap().is_empty());

        let public = get_event(&f.state, &AuthSession::anonymous(), event_id).await;
        assert!(matches!(public, Err(Error::NotFound(_))));

        let elevated = get_event(&f.state, &session_with_role(Role::Admin), event_id).await;
        assert!(elevated.is_ok());
    }

    #[tokio::test]
    async fn test_list_all_requires_elevation() {
        let f = fixture(MockEventStore::new());

        let anon = list_all_events(&f.state, &AuthSession::anonymous()).await;
        assert!(matches!(anon, Err(Error::AuthRequired)));

        let member = list_all_events(&f.state, &session_with_role(Role::Member)).await;
        assert!(matches!(member, Err(Error::Forbidden(_))));

        let admin = list_all_events(&f.state, &session_with_role(Role::Admin)).await;
        assert!(admin.is_ok());
    }

    #[tokio::test]
    async fn test_update_revalidates_detail_page() {
        let event = MockEventStore::make_event(&draft(), Uuid::new_v4());
        let event_id = event.id;
        let f = fixture(MockEventStore::with_events(vec![event]));

        let mut changed = draft();
        changed.title = "AGM (rescheduled)".to_string();
        let result = update_event(&f.state, &session_with_role(Role::Admin), event_id, changed).await;

        assert!(result.success);
        assert_eq!(result.data.unwrap().title, "AGM (rescheduled)");
        assert!(f.revalidator.was_revalidated(&event_detail_path(event_id)));
    }
}
