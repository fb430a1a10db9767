//! Domain entities for the Clubdesk events domain
//!
//! Events are the club's public happenings; competitions are the
//! orderable sub-items an event hosts. Both carry a publish flag.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clubdesk_common::{Error, Result};

/// Delivery mode of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "event_mode", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventMode {
    #[default]
    Offline,
    Online,
    Hybrid,
}

impl std::fmt::Display for EventMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventMode::Offline => write!(f, "offline"),
            EventMode::Online => write!(f, "online"),
            EventMode::Hybrid => write!(f, "hybrid"),
        }
    }
}

/// Event entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub venue: Option<String>,
    pub mode: EventMode,
    pub event_type: String,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub poster_url: Option<String>,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable field set for an event, used for both create and update.
///
/// Timestamps are stamped at the data-access boundary, never taken
/// from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub venue: Option<String>,
    pub mode: EventMode,
    pub event_type: String,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub poster_url: Option<String>,
    pub tags: Vec<String>,
}

impl EventDraft {
    /// Validate invariants before the draft reaches the store.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() || self.title.len() > 200 {
            return Err(Error::Validation(
                "Event title must be 1-200 characters".to_string(),
            ));
        }

        if self.ends_at <= self.starts_at {
            return Err(Error::Validation(
                "Event must end after it starts".to_string(),
            ));
        }

        if let Some(deadline) = self.registration_deadline {
            if deadline > self.starts_at {
                return Err(Error::Validation(
                    "Registration deadline cannot be after the event starts".to_string(),
                ));
            }
        }

        if self.event_type.trim().is_empty() {
            return Err(Error::Validation(
                "Event type cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Competition entity - orderable sub-item of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Competition {
    pub id: Uuid,
    pub event_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub fee: Decimal,
    /// Dense, zero-based position among siblings of the same event
    pub display_order: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Mutable field set for a competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionDraft {
    pub event_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub fee: Decimal,
}

impl CompetitionDraft {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() || self.title.len() > 200 {
            return Err(Error::Validation(
                "Competition title must be 1-200 characters".to_string(),
            ));
        }

        if self.fee < Decimal::ZERO {
            return Err(Error::Validation(
                "Competition fee cannot be negative".to_string(),
            ));
        }

        Ok(())
    }
}

/// One entry of a full display-order reassignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionOrder {
    pub id: Uuid,
    pub display_order: i32,
}

/// Check that a submitted reassignment is a contiguous zero-based
/// permutation. Partial submissions desynchronize siblings, so they
/// are rejected before any write.
pub fn validate_order_submission(items: &[CompetitionOrder]) -> Result<()> {
    if items.is_empty() {
        return Err(Error::Validation(
            "Order submission cannot be empty".to_string(),
        ));
    }

    let mut seen = vec![false; items.len()];
    for item in items {
        let order = item.display_order;
        if order < 0 || order as usize >= items.len() {
            return Err(Error::Validation(format!(
                "Display order {} is outside 0..{}",
                order,
                items.len() - 1
            )));
        }
        if seen[order as usize] {
            return Err(Error::Validation(format!(
                "Display order {} submitted twice",
                order
            )));
        }
        seen[order as usize] = true;
    }

    Ok(())
}
