//! Session JWT claims

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by the session collaborator's JWT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Identity id
    pub sub: Uuid,
    pub email: String,
    /// Expiry, seconds since epoch (validated by jsonwebtoken)
    pub exp: i64,
    /// Issued-at, seconds since epoch
    #[serde(default)]
    pub iat: Option<i64>,
}

impl SessionClaims {
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(|ts| Utc.timestamp_opt(ts, 0).single())
    }
}
