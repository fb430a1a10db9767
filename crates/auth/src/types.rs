//! Auth read-model types
//!
//! Lightweight views of the rows the session collaborator and the
//! profiles table own. These types carry only the fields needed for
//! authentication and authorization decisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated account reference issued by the session collaborator.
///
/// Consumed, never mutated, by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    /// Opaque credential metadata (provider, issued-at) carried through
    /// from the session token for audit logging.
    pub issued_at: Option<DateTime<Utc>>,
}

/// Platform role. A closed set: adding a role never touches call sites
/// that only care about the elevated/not-elevated boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, Serialize, Deserialize, Default)]
#[sqlx(type_name = "profile_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Executive,
    #[default]
    Member,
}

impl Role {
    /// Elevated roles are authorized for privileged mutations.
    pub fn is_elevated(&self) -> bool {
        matches!(self, Role::Admin | Role::Executive)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Executive => write!(f, "executive"),
            Role::Member => write!(f, "member"),
        }
    }
}

/// The platform's own record for an Identity, carrying role and
/// display data. 1:1 with Identity once created; never exists without
/// a matching Identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    /// Same value as the identity id
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub role: Role,
    /// Batch/cohort tag, e.g. "2027"
    pub batch: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
