//! Data access boundary for the resources domain

mod resources;

pub use resources::PgResourceStore;

use async_trait::async_trait;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::domain::{Resource, ResourceDraft};

/// Store seam for learning resources.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Every resource, newest first. Admin listing.
    async fn list(&self) -> Result<Vec<Resource>, RepositoryError>;

    /// Published resources, featured first then newest.
    async fn list_published(&self) -> Result<Vec<Resource>, RepositoryError>;

    async fn find(&self, id: Uuid) -> Result<Option<Resource>, RepositoryError>;

    /// Insert at Pending, not featured.
    async fn insert(&self, draft: &ResourceDraft) -> Result<Resource, RepositoryError>;

    async fn update(&self, id: Uuid, draft: &ResourceDraft) -> Result<Resource, RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// Flip Pending <-> Published.
    async fn toggle_status(&self, id: Uuid) -> Result<Resource, RepositoryError>;

    async fn toggle_featured(&self, id: Uuid) -> Result<Resource, RepositoryError>;
}
