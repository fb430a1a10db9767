//! Mutation actions for the roster

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use clubdesk_auth::AuthSession;
use clubdesk_common::{ActionResult, Result};
use clubdesk_revalidate::{revalidate_paths, SharedRevalidator};

use crate::domain::{Member, MemberDraft};
use crate::repository::MemberStore;

/// Public pages refreshed after roster mutations.
pub const MEMBERS_PATH: &str = "/members";
pub const ADMIN_MEMBERS_PATH: &str = "/admin/members";

/// Shared dependencies for the members domain.
#[derive(Clone)]
pub struct MembersState {
    pub members: Arc<dyn MemberStore>,
    pub revalidator: SharedRevalidator,
}

impl MembersState {
    pub fn new(members: Arc<dyn MemberStore>, revalidator: SharedRevalidator) -> Self {
        Self {
            members,
            revalidator,
        }
    }
}

/// List the roster ordered by category and display order. Public.
pub async fn list_members(state: &MembersState) -> Result<Vec<Member>> {
    Ok(state.members.list().await?)
}

/// Create a roster member. Privileged.
pub async fn create_member(
    state: &MembersState,
    session: &AuthSession,
    draft: MemberDraft,
) -> ActionResult<Member> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("create", "member");
    }

    if let Err(e) = draft.validate() {
        return ActionResult::err(e);
    }

    let member = match state.members.insert(&draft).await {
        Ok(member) => member,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(member_id = %member.id, category = %member.category, "Roster member created");
    revalidate_paths(state.revalidator.as_ref(), &[MEMBERS_PATH, ADMIN_MEMBERS_PATH]).await;

    ActionResult::ok(member, "Member created successfully")
}

/// Update a roster member. Privileged.
pub async fn update_member(
    state: &MembersState,
    session: &AuthSession,
    member_id: Uuid,
    draft: MemberDraft,
) -> ActionResult<Member> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("update", "member");
    }

    if let Err(e) = draft.validate() {
        return ActionResult::err(e);
    }

    let member = match state.members.update(member_id, &draft).await {
        Ok(member) => member,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(member_id = %member.id, "Roster member updated");
    revalidate_paths(state.revalidator.as_ref(), &[MEMBERS_PATH, ADMIN_MEMBERS_PATH]).await;

    ActionResult::ok(member, "Member updated successfully")
}

/// Delete a roster member. Privileged.
pub async fn delete_member(
    state: &MembersState,
    session: &AuthSession,
    member_id: Uuid,
) -> ActionResult<()> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("delete", "member");
    }

    if let Err(e) = state.members.delete(member_id).await {
        return ActionResult::err(e.into());
    }

    info!(member_id = %member_id, "Roster member deleted");
    revalidate_paths(state.revalidator.as_ref(), &[MEMBERS_PATH, ADMIN_MEMBERS_PATH]).await;

    ActionResult::ok_message("Member deleted successfully")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockMemberStore;
    use chrono::Utc;
    use clubdesk_auth::{Identity, Profile, Role};
    use clubdesk_common::ErrorKind;
    use clubdesk_revalidate::MockRevalidator;

    fn draft(name: &str, category: &str) -> MemberDraft {
        MemberDraft {
            name: name.to_string(),
            title: "Core Member".to_string(),
            photo_url: None,
            category: category.to_string(),
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
        state: MembersState,
        members: Arc<MockMemberStore>,
        revalidator: Arc<MockRevalidator>,
    }

    fn fixture(members: MockMemberStore) -> Fixture {
        let members = Arc::new(members);
        let revalidator = Arc::new(MockRevalidator::new());
        let state = MembersState::new(members.clone(), revalidator.clone());
        Fixture {
            state,
            members,
            revalidator,
        }
    }

    #[tokio::test]
    async fn test_anonymous_create_is_rejected_before_any_write() {
        let f = fixture(MockMemberStore::new());
        let result = create_member(&f.state, &AuthSession::anonymous(), draft("A", "executive")).await;

        assert_eq!(result.error.unwrap().kind, ErrorKind::AuthRequired);
        assert_eq!(f.members.write_calls(), 0);
        assert!(f.revalidator.recorded_paths().is_empty());
    }

    #[tokio::test]
    async fn test_member_role_cannot_edit_roster() {
        let f = fixture(MockMemberStore::new());
        let result =
            create_member(&f.state, &session_with_role(Role::Member), draft("A", "executive")).await;

        let error = result.error.unwrap();
        assert_eq!(error.kind, ErrorKind::Forbidden);
        assert_eq!(error.message, "Insufficient permissions to create member");
        assert_eq!(f.members.write_calls(), 0);
    }

    #[tokio::test]
    async fn test_admin_creates_member_and_revalidates() {
        let f = fixture(MockMemberStore::new());
        let result =
            create_member(&f.state, &session_with_role(Role::Admin), draft("A", "executive")).await;

        assert!(result.success);
        assert_eq!(result.data.unwrap().display_order, 0);
        assert!(f.revalidator.was_revalidated(MEMBERS_PATH));
        assert!(f.revalidator.was_revalidated(ADMIN_MEMBERS_PATH));
    }

    #[tokio::test]
    async fn test_insert_appends_within_category() {
        let f = fixture(MockMemberStore::new());
        let session = session_with_role(Role::Executive);

        let a = create_member(&f.state, &session, draft("A", "executive"))
            .await
            .data
            .unwrap();
        let b = create_member(&f.state, &session, draft("B", "executive"))
            .await
            .data
            .unwrap();
        let c = create_member(&f.state, &session, draft("C", "alumni"))
            .await
            .data
            .unwrap();

        assert_eq!(a.display_order, 0);
        assert_eq!(b.display_order, 1);
        // Different category starts its own order
        assert_eq!(c.display_order, 0);
    }

    #[tokio::test]
    async fn test_roster_listing_orders_by_category_then_position() {
        let f = fixture(MockMemberStore::new());
        let session = session_with_role(Role::Admin);

        create_member(&f.state, &session, draft("Exec A", "executive")).await;
        create_member(&f.state, &session, draft("Alumni A", "alumni")).await;
        create_member(&f.state, &session, draft("Exec B", "executive")).await;

        let roster = list_members(&f.state).await.unwrap();
        let names: Vec<&str> = roster.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alumni A", "Exec A", "Exec B"]);
    }

    #[tokio::test]
    async fn test_update_missing_member_is_not_found() {
        let f = fixture(MockMemberStore::new());
        let result = update_member(
            &f.state,
            &session_with_role(Role::Admin),
            Uuid::new_v4(),
            draft("A", "executive"),
        )
        .await;

        assert_eq!(result.error.unwrap().kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_member() {
        let member = MockMemberStore::make_member(&draft("A", "executive"), 0);
        let member_id = member.id;
        let f = fixture(MockMemberStore::with_members(vec![member]));

        let result = delete_member(&f.state, &session_with_role(Role::Admin), member_id).await;
        assert!(result.success);
        assert_eq!(result.message.as_deref(), Some("Member deleted successfully"));
        assert!(list_members(&f.state).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_draft_is_rejected_before_any_write() {
        let f = fixture(MockMemberStore::new());
        let result =
            create_member(&f.state, &session_with_role(Role::Admin), draft("", "executive")).await;

        assert_eq!(result.error.unwrap().kind, ErrorKind::Validation);
        assert_eq!(f.members.write_calls(), 0);
    }
}
