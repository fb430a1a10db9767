//! Clubdesk view-cache revalidation
//!
//! Mutation actions signal which rendered read paths may now be stale.
//! The collaborator is best-effort: a failed revalidation is logged and
//! swallowed, never reported as an action failure. Over-invalidation is
//! acceptable; under-invalidation is a correctness bug in the caller.

pub mod client;
pub mod mock;

use std::sync::Arc;

use thiserror::Error;

pub use client::HttpRevalidator;
pub use mock::MockRevalidator;

#[derive(Error, Debug)]
pub enum RevalidateError {
    #[error("Revalidation request error: {0}")]
    Request(String),

    #[error("Revalidation endpoint returned error: {0}")]
    Response(String),
}

/// Path-level invalidation of a dependent read view.
#[async_trait::async_trait]
pub trait Revalidator: Send + Sync {
    /// Invalidate one rendered path, e.g. `/events` or `/admin/events`.
    async fn revalidate(&self, path: &str) -> Result<(), RevalidateError>;
}

/// Fire-and-forget convenience over a `Revalidator`: failures are
/// logged at warn level and discarded.
pub async fn revalidate_paths(revalidator: &dyn Revalidator, paths: &[&str]) {
    for path in paths {
        if let Err(e) = revalidator.revalidate(path).await {
            tracing::warn!(path, error = %e, "View revalidation failed (best-effort)");
        }
    }
}

/// No-op revalidator for setups without a view cache endpoint.
pub struct NoopRevalidator;

#[async_trait::async_trait]
impl Revalidator for NoopRevalidator {
    async fn revalidate(&self, path: &str) -> Result<(), RevalidateError> {
        tracing::trace!(path, "No revalidation endpoint configured; skipping");
        Ok(())
    }
}

/// Shared handle used by domain states.
pub type SharedRevalidator = Arc<dyn Revalidator>;
