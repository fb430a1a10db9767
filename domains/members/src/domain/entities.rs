//! Domain entities for the Clubdesk members domain
//!
//! Roster members are display records for the public team page. Their
//! lifecycle is independent of platform profiles: a roster entry needs
//! no login and a login needs no roster entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clubdesk_common::{Error, Result};

/// Roster member entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    /// Position within the club, e.g. "President" or "Core Member"
    pub title: String,
    pub photo_url: Option<String>,
    /// Roster section the member is listed under
    pub category: String,
    /// Dense, zero-based position within the category
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable field set for a roster member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
    pub title: String,
    pub photo_url: Option<String>,
    pub category: String,
}

impl MemberDraft {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.name.len() > 120 {
            return Err(Error::Validation(
                "Member name must be 1-120 characters".to_string(),
            ));
        }

        if self.title.trim().is_empty() || self.title.len() > 120 {
            return Err(Error::Validation(
                "Member title must be 1-120 characters".to_string(),
            ));
        }

        if self.category.trim().is_empty() {
            return Err(Error::Validation(
                "Member category cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
