//! Mutation actions for learning resources

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use clubdesk_auth::AuthSession;
use clubdesk_common::{ActionResult, Error, Result};
use clubdesk_revalidate::{revalidate_paths, SharedRevalidator};

use crate::domain::{Resource, ResourceDraft};
use crate::repository::ResourceStore;

/// Public pages refreshed after resource mutations.
pub const RESOURCES_PATH: &str = "/resources";
pub const ADMIN_RESOURCES_PATH: &str = "/admin/resources";

/// Shared dependencies for the resources domain.
#[derive(Clone)]
pub struct ResourcesState {
    pub resources: Arc<dyn ResourceStore>,
    pub revalidator: SharedRevalidator,
}

impl ResourcesState {
    pub fn new(resources: Arc<dyn ResourceStore>, revalidator: SharedRevalidator) -> Self {
        Self {
            resources,
            revalidator,
        }
    }
}

/// List published resources, featured first. Public.
pub async fn list_published_resources(state: &ResourcesState) -> Result<Vec<Resource>> {
    Ok(state.resources.list_published().await?)
}

/// List every resource, including pending ones. Privileged.
pub async fn list_all_resources(
    state: &ResourcesState,
    session: &AuthSession,
) -> Result<Vec<Resource>> {
    if !session.is_authenticated() {
        return Err(Error::AuthRequired);
    }
    if !session.is_elevated() {
        return Err(Error::forbidden("list", "resources"));
    }

    Ok(state.resources.list().await?)
}

/// Create a resource at Pending. Privileged.
pub async fn create_resource(
    state: &ResourcesState,
    session: &AuthSession,
    draft: ResourceDraft,
) -> ActionResult<Resource> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("create", "resource");
    }

    if let Err(e) = draft.validate() {
        return ActionResult::err(e);
    }

    let resource = match state.resources.insert(&draft).await {
        Ok(resource) => resource,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(resource_id = %resource.id, category = %resource.category, "Resource created");
    revalidate_paths(
        state.revalidator.as_ref(),
        &[RESOURCES_PATH, ADMIN_RESOURCES_PATH],
    )
    .await;

    ActionResult::ok(resource, "Resource created successfully")
}

/// Update a resource's fields. Privileged. Status and featured flag
/// are untouched here.
pub async fn update_resource(
    state: &ResourcesState,
    session: &AuthSession,
    resource_id: Uuid,
    draft: ResourceDraft,
) -> ActionResult<Resource> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("update", "resource");
    }

    if let Err(e) = draft.validate() {
        return ActionResult::err(e);
    }

    let resource = match state.resources.update(resource_id, &draft).await {
        Ok(resource) => resource,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(resource_id = %resource.id, "Resource updated");
    revalidate_paths(
        state.revalidator.as_ref(),
        &[RESOURCES_PATH, ADMIN_RESOURCES_PATH],
    )
    .await;

    ActionResult::ok(resource, "Resource updated successfully")
}

/// Delete a resource. Privileged.
pub async fn delete_resource(
    state: &ResourcesState,
    session: &AuthSession,
    resource_id: Uuid,
) -> ActionResult<()> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("delete", "resource");
    }

    if let Err(e) = state.resources.delete(resource_id).await {
        return ActionResult::err(e.into());
    }

    info!(resource_id = %resource_id, "Resource deleted");
    revalidate_paths(
        state.revalidator.as_ref(),
        &[RESOURCES_PATH, ADMIN_RESOURCES_PATH],
    )
    .await;

    ActionResult::ok_message("Resource deleted successfully")
}

/// Flip a resource between Pending and Published. Privileged.
pub async fn toggle_resource_status(
    state: &ResourcesState,
    session: &AuthSession,
    resource_id: Uuid,
) -> ActionResult<Resource> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("update", "resource");
    }

    let resource = match state.resources.toggle_status(resource_id).await {
        Ok(resource) => resource,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(resource_id = %resource.id, status = %resource.status, "Resource status toggled");
    revalidate_paths(
        state.revalidator.as_ref(),
        &[RESOURCES_PATH, ADMIN_RESOURCES_PATH],
    )
    .await;

    ActionResult::ok(resource, "Resource status updated")
}

/// Flip a resource's featured flag. Privileged.
pub async fn toggle_resource_featured(
    state: &ResourcesState,
    session: &AuthSession,
    resource_id: Uuid,
) -> ActionResult<Resource> {
    if !session.is_authenticated() {
        return ActionResult::auth_required();
    }
    if !session.is_elevated() {
        return ActionResult::forbidden("update", "resource");
    }

    let resource = match state.resources.toggle_featured(resource_id).await {
        Ok(resource) => resource,
        Err(e) => return ActionResult::err(e.into()),
    };

    info!(resource_id = %resource.id, is_featured = resource.is_featured, "Resource featured flag toggled");
    revalidate_paths(
        state.revalidator.as_ref(),
        &[RESOURCES_PATH, ADMIN_RESOURCES_PATH],
    )
    .await;

    ActionResult::ok(resource, "Resource featured flag updated")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResourceStatus;
    use crate::testing::MockResourceStore;
    use chrono::Utc;
    use clubdesk_auth::{Identity, Profile, Role};
    use clubdesk_common::ErrorKind;
    use clubdesk_revalidate::MockRevalidator;

    fn draft(title: &str) -> ResourceDraft {
        ResourceDraft {
            title: title.to_string(),
            category: "tutorial".to_string(),
            resource_url: "https://example.com/r".to_string(),
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
        state: ResourcesState,
        resources: Arc<MockResourceStore>,
        revalidator: Arc<MockRevalidator>,
    }

    fn fixture(resources: MockResourceStore) -> Fixture {
        let resources = Arc::new(resources);
        let revalidator = Arc::new(MockRevalidator::new());
        let state = ResourcesState::new(resources.clone(), revalidator.clone());
        Fixture {
            state,
            resources,
            revalidator,
        }
    }

    #[tokio::test]
    async fn test_anonymous_create_is_rejected_before_any_write() {
        let f = fixture(MockResourceStore::new());
        let result = create_resource(&f.state, &AuthSession::anonymous(), draft("A")).await;

        assert_eq!(result.error.unwrap().kind, ErrorKind::AuthRequired);
        assert_eq!(f.resources.write_calls(), 0);
        assert!(f.revalidator.recorded_paths().is_empty());
    }

    #[tokio::test]
    async fn test_new_resource_starts_pending_and_unfeatured() {
        let f = fixture(MockResourceStore::new());
        let result = create_resource(&f.state, &session_with_role(Role::Admin), draft("A")).await;

        let resource = result.data.unwrap();
        assert_eq!(resource.status, ResourceStatus::Pending);
        assert!(!resource.is_featured);
        assert!(f.revalidator.was_revalidated(RESOURCES_PATH));
        assert!(f.revalidator.was_revalidated(ADMIN_RESOURCES_PATH));
    }

    #[tokio::test]
    async fn test_toggle_status_twice_restores_original() {
        let f = fixture(MockResourceStore::new());
        let session = session_with_role(Role::Executive);
        let resource = create_resource(&f.state, &session, draft("A"))
            .await
            .data
            .unwrap();

        let once = toggle_resource_status(&f.state, &session, resource.id).await;
        assert_eq!(once.data.unwrap().status, ResourceStatus::Published);

        let twice = toggle_resource_status(&f.state, &session, resource.id).await;
        assert_eq!(twice.data.unwrap().status, ResourceStatus::Pending);
    }

    #[tokio::test]
    async fn test_toggle_featured_twice_restores_original() {
        let f = fixture(MockResourceStore::new());
        let session = session_with_role(Role::Admin);
        let resource = create_resource(&f.state, &session, draft("A"))
            .await
            .data
            .unwrap();

        let once = toggle_resource_featured(&f.state, &session, resource.id).await;
        assert!(once.data.unwrap().is_featured);

        let twice = toggle_resource_featured(&f.state, &session, resource.id).await;
        assert!(!twice.data.unwrap().is_featured);
    }

    #[tokio::test]
    async fn test_public_listing_shows_featured_published_first() {
        let f = fixture(MockResourceStore::new());
        let session = session_with_role(Role::Admin);

        let pending = create_resource(&f.state, &session, draft("Pending"))
            .await
            .data
            .unwrap();
        let plain = create_resource(&f.state, &session, draft("Plain"))
            .await
            .data
            .unwrap();
        let featured = create_resource(&f.state, &session, draft("Featured"))
            .await
            .data
            .unwrap();

        toggle_resource_status(&f.state, &session, plain.id).await;
        toggle_resource_status(&f.state, &session, featured.id).await;
        toggle_resource_featured(&f.state, &session, featured.id).await;

        let listed = list_published_resources(&f.state).await.unwrap();
        let titles: Vec<&str> = listed.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Featured", "Plain"]);
        assert!(!listed.iter().any(|r| r.id == pending.id));
    }

    #[tokio::test]
    async fn test_member_cannot_toggle_status() {
        let f = fixture(MockResourceStore::new());
        let admin = session_with_role(Role::Admin);
        let resource = create_resource(&f.state, &admin, draft("A"))
            .await
            .data
            .unwrap();
        let writes_before = f.resources.write_calls();

        let result =
            toggle_resource_status(&f.state, &session_with_role(Role::Member), resource.id).await;

        let error = result.error.unwrap();
        assert_eq!(error.kind, ErrorKind::Forbidden);
        assert_eq!(error.message, "Insufficient permissions to update resource");
        assert_eq!(f.resources.write_calls(), writes_before);
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_any_write() {
        let f = fixture(MockResourceStore::new());
        let mut bad = draft("A");
        bad.resource_url = "javascript:alert(1)".to_string();
        let result = create_resource(&f.state, &session_with_role(Role::Admin), bad).await;

        assert_eq!(result.error.unwrap().kind, ErrorKind::Validation);
        assert_eq!(f.resources.write_calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_resource_is_not_found() {
        let f = fixture(MockResourceStore::new());
        let result =
            delete_resource(&f.state, &session_with_role(Role::Admin), Uuid::new_v4()).await;

        assert!(result.is_consistent());
        assert_eq!(result.error.unwrap().kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_admin_listing_requires_elevation() {
        let f = fixture(MockResourceStore::new());

        let anon = list_all_resources(&f.state, &AuthSession::anonymous()).await;
        assert!(matches!(anon, Err(Error::AuthRequired)));

        let member = list_all_resources(&f.state, &session_with_role(Role::Member)).await;
        assert!(matches!(member, Err(Error::Forbidden(_))));

        let admin = list_all_resources(&f.state, &session_with_role(Role::Admin)).await;
        assert!(admin.is_ok());
    }
}
