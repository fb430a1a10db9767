//! Domain entities for the Clubdesk resources domain
//!
//! Resources are curated links (tutorials, slides, recordings). New
//! submissions sit at Pending until staff publishes them; a featured
//! flag floats a resource to the top of the public listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clubdesk_common::{Error, Result};

/// Review state of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "resource_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    #[default]
    Pending,
    Published,
}

impl ResourceStatus {
    /// The other state; toggling twice restores the original.
    pub fn toggled(self) -> Self {
        match self {
            ResourceStatus::Pending => ResourceStatus::Published,
            ResourceStatus::Published => ResourceStatus::Pending,
        }
    }
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceStatus::Pending => write!(f, "pending"),
            ResourceStatus::Published => write!(f, "published"),
        }
    }
}

/// Resource entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub status: ResourceStatus,
    pub is_featured: bool,
    pub resource_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable field set for a resource. Status and featured flag change
/// only through their toggle actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDraft {
    pub title: String,
    pub category: String,
    pub resource_url: String,
}

impl ResourceDraft {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() || self.title.len() > 200 {
            return Err(Error::Validation(
                "Resource title must be 1-200 characters".to_string(),
            ));
        }

        if self.category.trim().is_empty() {
            return Err(Error::Validation(
                "Resource category cannot be empty".to_string(),
            ));
        }

        if !self.resource_url.starts_with("http://") && !self.resource_url.starts_with("https://") {
            return Err(Error::Validation(
                "Resource URL must be an http(s) URL".to_string(),
            ));
        }

        Ok(())
    }
}
