//! Registration workflow integration tests
//!
//! Walks the self-service flow end to end: submit, check status,
//! staff review, bulk status move, and the duplicate policy in both
//! settings.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use clubdesk_auth::{AuthSession, Identity, Profile, Role};
use clubdesk_common::ErrorKind;
use clubdesk_registrations::actions;
use clubdesk_registrations::testing::MockRegistrationStore;
use clubdesk_registrations::{
    RegistrationPolicy, RegistrationRequest, RegistrationStatus, RegistrationsState,
};
use clubdesk_revalidate::MockRevalidator;

fn request(email: &str, event_id: Uuid) -> RegistrationRequest {
    RegistrationRequest {
        name: "Dev Patel".to_string(),
        email: email.to_string(),
        institution_id: "CLG-007".to_string(),
        institution: "Sample Institute".to_string(),
        phone: Some("+91-9111111111".to_string()),
        event_id,
        competition_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
        transaction_ref: Some("UPI-42".to_string()),
        amount: Some(Decimal::new(50000, 2)),
    }
}

fn staff_session() -> AuthSession {
    let id = Uuid::new_v4();
    let now = Utc::now();
    AuthSession::new(
        Identity {
            id,
            email: "exec@club.example".to_string(),
            issued_at: Some(now),
        },
        Some(Profile {
            id,
            email: "exec@club.example".to_string(),
            display_name: Some("Exec".to_string()),
            role: Role::Executive,
            batch: Some("2024".to_string()),
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }),
    )
}

fn state_with_policy(policy: RegistrationPolicy) -> (RegistrationsState, Arc<MockRegistrationStore>) {
    let store = Arc::new(MockRegistrationStore::new());
    let state = RegistrationsState::new(store.clone(), policy, Arc::new(MockRevalidator::new()));
    (state, store)
}

#[test_log::test(tokio::test)]
async fn test_full_registration_review_cycle() {
    let (state, _store) = state_with_policy(RegistrationPolicy::default());
    let event_id = Uuid::new_v4();

    // Submit: always lands at Pending.
    let submitted = actions::register_for_event(&state, request("dev@inst.example", event_id)).await;
    assert!(submitted.success);
    let registration = submitted.data.unwrap();
    assert_eq!(registration.status, RegistrationStatus::Pending);

    // Self-service status check sees the pending registration.
    let key = request("dev@inst.example", event_id).participant_key();
    let own = actions::get_registration_status(&state, &key, event_id).await.unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].status, RegistrationStatus::Pending);

    // Staff confirms it.
    let staff = staff_session();
    let confirmed = actions::update_participant_status(
        &state,
        &staff,
        registration.id,
        RegistrationStatus::Confirmed,
    )
    .await;
    assert!(confirmed.success);

    // The public status check reflects the move.
    let own = actions::get_registration_status(&state, &key, event_id).await.unwrap();
    assert_eq!(own[0].status, RegistrationStatus::Confirmed);

    // Review table carries the joined participant details.
    let rows = actions::list_event_registrations(&state, &staff, event_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].participant_email, "dev@inst.example");
    assert_eq!(rows[0].status, RegistrationStatus::Confirmed);
}

#[tokio::test]
async fn test_bulk_move_covers_event_and_spares_others() {
    let (state, store) = state_with_policy(RegistrationPolicy::default());
    let staff = staff_session();
    let event_a = Uuid::new_v4();
    let event_b = Uuid::new_v4();

    let first = actions::register_for_event(&state, request("dev@inst.example", event_a))
        .await
        .data
        .unwrap();
    actions::register_for_event(&state, request("dev@inst.example", event_a)).await;
    actions::register_for_event(&state, request("dev@inst.example", event_b)).await;

    let writes_before_denied = store.write_calls();
    let denied = actions::update_all_participant_statuses(
        &state,
        &AuthSession::anonymous(),
        first.participant_id,
        event_a,
        RegistrationStatus::Rejected,
    )
    .await;
    assert_eq!(denied.error.unwrap().kind, ErrorKind::AuthRequired);
    assert_eq!(store.write_calls(), writes_before_denied);

    let moved = actions::update_all_participant_statuses(
        &state,
        &staff,
        first.participant_id,
        event_a,
        RegistrationStatus::Rejected,
    )
    .await;
    assert_eq!(moved.data, Some(2));

    for r in store.registrations() {
        let expected = if r.event_id == event_a {
            RegistrationStatus::Rejected
        } else {
            RegistrationStatus::Pending
        };
        assert_eq!(r.status, expected);
    }
}

#[tokio::test]
async fn test_duplicate_policy_both_settings() {
    let event_id = Uuid::new_v4();

    // Default: duplicates accepted, one participant row, two registrations.
    let (open, open_store) = state_with_policy(RegistrationPolicy::default());
    let a = actions::register_for_event(&open, request("dup@inst.example", event_id)).await;
    let b = actions::register_for_event(&open, request("dup@inst.example", event_id)).await;
    assert!(a.success && b.success);
    let regs = open_store.registrations();
    assert_eq!(regs.len(), 2);
    assert_eq!(regs[0].participant_id, regs[1].participant_id);

    // Strict: the second submission is a conflict.
    let (strict, strict_store) = state_with_policy(RegistrationPolicy {
        reject_duplicates: true,
    });
    let first = actions::register_for_event(&strict, request("dup@inst.example", event_id)).await;
    assert!(first.success);
    let second = actions::register_for_event(&strict, request("dup@inst.example", event_id)).await;
    assert_eq!(second.error.unwrap().kind, ErrorKind::Conflict);
    assert_eq!(strict_store.registrations().len(), 1);
}
