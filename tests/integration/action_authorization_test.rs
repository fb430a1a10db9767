//! Authorization workflow integration tests
//!
//! Drives the mutation actions end to end against in-memory stores:
//! denied sessions must produce the right envelope with zero boundary
//! writes, elevated sessions must complete the full template
//! including revalidation.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use clubdesk_auth::{AuthSession, Identity, Profile, Role};
use clubdesk_common::ErrorKind;
use clubdesk_events::actions as event_actions;
use clubdesk_events::testing::{MockCompetitionStore, MockEventStore};
use clubdesk_events::{CompetitionDraft, CompetitionOrder, EventDraft, EventMode, EventsState};
use clubdesk_revalidate::MockRevalidator;

fn session_with_role(role: Role) -> AuthSession {
    let id = Uuid::new_v4();
    let now = Utc::now();
    AuthSession::new(
        Identity {
            id,
            email: "staff@club.example".to_string(),
            issued_at: Some(now),
        },
        Some(Profile {
            id,
            email: "staff@club.example".to_string(),
            display_name: Some("Staff".to_string()),
            role,
            batch: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }),
    )
}

fn event_draft(title: &str) -> EventDraft {
    let starts = Utc::now() + Duration::days(10);
    EventDraft {
        title: title.to_string(),
        description: Some("Integration scenario".to_string()),
        starts_at: starts,
        ends_at: starts + Duration::hours(6),
        venue: Some("Auditorium".to_string()),
        mode: EventMode::Offline,
        event_type: "workshop".to_string(),
        registration_deadline: Some(starts - Duration::days(1)),
        poster_url: None,
        tags: vec!["workshop".to_string()],
    }
}

struct Fixture {
    state: EventsState,
    events: Arc<MockEventStore>,
    competitions: Arc<MockCompetitionStore>,
    revalidator: Arc<MockRevalidator>,
}

fn fixture() -> Fixture {
    let events = Arc::new(MockEventStore::new());
    let competitions = Arc::new(MockCompetitionStore::new());
    let revalidator = Arc::new(MockRevalidator::new());
    let state = EventsState::new(events.clone(), competitions.clone(), revalidator.clone());
    Fixture {
        state,
        events,
        competitions,
        revalidator,
    }
}

#[test_log::test(tokio::test)]
async fn test_anonymous_delete_produces_auth_required_with_zero_store_calls() {
    let f = fixture();
    let event = MockEventStore::make_event(&event_draft("Guarded"), Uuid::new_v4());
    let events = Arc::new(MockEventStore::with_events(vec![event.clone()]));
    let state = EventsState::new(events.clone(), f.competitions.clone(), f.revalidator.clone());

    let result = event_actions::delete_event(&state, &AuthSession::anonymous(), event.id).await;

    assert!(!result.success);
    assert!(result.is_consistent());
    let error = result.error.unwrap();
    assert_eq!(error.kind, ErrorKind::AuthRequired);
    assert_eq!(error.message, "Authentication required");

    assert_eq!(events.write_calls(), 0);
    assert!(f.revalidator.recorded_paths().is_empty());
    // The event is still there.
    assert!(event_actions::get_event(&state, &session_with_role(Role::Admin), event.id)
        .await
        .is_ok());
}

#[test_log::test(tokio::test)]
async fn test_elevated_delete_succeeds_then_read_is_not_found() {
    let f = fixture();
    let session = session_with_role(Role::Executive);

    let created = event_actions::create_event(&f.state, &session, event_draft("Doomed")).await;
    assert!(created.success);
    let event_id = created.data.unwrap().id;

    let deleted = event_actions::delete_event(&f.state, &session, event_id).await;
    assert!(deleted.success);
    assert_eq!(deleted.message.as_deref(), Some("Event deleted successfully"));
    assert!(f.revalidator.was_revalidated(event_actions::EVENTS_PATH));
    assert!(f.revalidator.was_revalidated(event_actions::ADMIN_EVENTS_PATH));

    let read = event_actions::get_event(&f.state, &session, event_id).await;
    assert!(read.is_err());
}

#[tokio::test]
async fn test_member_session_is_forbidden_for_every_event_mutation() {
    let f = fixture();
    let member = session_with_role(Role::Member);
    let id = Uuid::new_v4();

    let create = event_actions::create_event(&f.state, &member, event_draft("X")).await;
    let update = event_actions::update_event(&f.state, &member, id, event_draft("X")).await;
    let delete = event_actions::delete_event(&f.state, &member, id).await;
    let toggle = event_actions::toggle_event_status(&f.state, &member, id).await;

    assert_eq!(create.error.unwrap().kind, ErrorKind::Forbidden);
    assert_eq!(update.error.unwrap().kind, ErrorKind::Forbidden);
    assert_eq!(delete.error.unwrap().kind, ErrorKind::Forbidden);
    assert_eq!(toggle.error.unwrap().kind, ErrorKind::Forbidden);

    assert_eq!(f.events.write_calls(), 0);
    assert!(f.revalidator.recorded_paths().is_empty());
}

#[tokio::test]
async fn test_reorder_round_trip_changes_ascending_reads() {
    let f = fixture();
    let session = session_with_role(Role::Admin);

    let event = event_actions::create_event(&f.state, &session, event_draft("Fest"))
        .await
        .data
        .unwrap();

    let mut ids = Vec::new();
    for title in ["Quiz", "Debate", "Hack"] {
        let competition = event_actions::create_competition(
            &f.state,
            &session,
            CompetitionDraft {
                event_id: event.id,
                title: title.to_string(),
                description: None,
                fee: Decimal::new(5000, 2),
            },
        )
        .await
        .data
        .unwrap();
        ids.push(competition.id);
    }

    // Submit [{C1,1},{C2,0},{C3,2}]: C2 must now come before C1.
    let items = vec![
        CompetitionOrder { id: ids[0], display_order: 1 },
        CompetitionOrder { id: ids[1], display_order: 0 },
        CompetitionOrder { id: ids[2], display_order: 2 },
    ];
    let result = event_actions::update_competition_order(&f.state, &session, event.id, items).await;
    assert!(result.success);

    let listed = event_actions::list_competitions(&f.state, event.id).await.unwrap();
    let order: Vec<Uuid> = listed.iter().map(|c| c.id).collect();
    assert_eq!(order, vec![ids[1], ids[0], ids[2]]);
}

#[tokio::test]
async fn test_publish_toggles_round_trip_across_domains() {
    // Event publish flag
    let f = fixture();
    let session = session_with_role(Role::Admin);
    let event = event_actions::create_event(&f.state, &session, event_draft("Toggle"))
        .await
        .data
        .unwrap();
    assert!(!event.is_published);

    let once = event_actions::toggle_event_status(&f.state, &session, event.id).await;
    let twice = event_actions::toggle_event_status(&f.state, &session, event.id).await;
    assert!(once.data.unwrap().is_published);
    assert!(!twice.data.unwrap().is_published);

    // Resource featured flag
    use clubdesk_resources::actions as resource_actions;
    use clubdesk_resources::testing::MockResourceStore;
    use clubdesk_resources::{ResourceDraft, ResourcesState};

    let resources = ResourcesState::new(
        Arc::new(MockResourceStore::new()),
        Arc::new(MockRevalidator::new()),
    );
    let resource = resource_actions::create_resource(
        &resources,
        &session,
        ResourceDraft {
            title: "Intro Deck".to_string(),
            category: "slides".to_string(),
            resource_url: "https://example.com/deck".to_string(),
        },
    )
    .await
    .data
    .unwrap();

    let once = resource_actions::toggle_resource_featured(&resources, &session, resource.id).await;
    let twice = resource_actions::toggle_resource_featured(&resources, &session, resource.id).await;
    assert!(once.data.unwrap().is_featured);
    assert!(!twice.data.unwrap().is_featured);
}

#[tokio::test]
async fn test_envelope_invariant_holds_across_outcomes() {
    let f = fixture();
    let admin = session_with_role(Role::Admin);

    let outcomes = vec![
        event_actions::create_event(&f.state, &AuthSession::anonymous(), event_draft("A")).await,
        event_actions::create_event(&f.state, &session_with_role(Role::Member), event_draft("B")).await,
        event_actions::create_event(&f.state, &admin, event_draft("C")).await,
        event_actions::update_event(&f.state, &admin, Uuid::new_v4(), event_draft("D")).await,
    ];

    for envelope in outcomes {
        assert!(envelope.is_consistent());
        if envelope.success {
            assert!(envelope.error.is_none());
            assert!(envelope.message.is_some());
        } else {
            assert!(envelope.data.is_none());
            assert!(envelope.error.is_some());
        }
    }
}
