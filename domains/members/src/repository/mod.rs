//! Data access boundary for the members domain

mod members;

pub use members::PgMemberStore;

use async_trait::async_trait;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::domain::{Member, MemberDraft};

/// Store seam for roster members.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// All members ordered by category, then display order.
    async fn list(&self) -> Result<Vec<Member>, RepositoryError>;

    async fn find(&self, id: Uuid) -> Result<Option<Member>, RepositoryError>;

    /// Insert a member at the end of its category's order.
    async fn insert(&self, draft: &MemberDraft) -> Result<Member, RepositoryError>;

    async fn update(&self, id: Uuid, draft: &MemberDraft) -> Result<Member, RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
