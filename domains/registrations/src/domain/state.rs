//! Registration status machine
//!
//! Statuses are review labels, not a lifecycle lock: staff may move a
//! registration between any two statuses, including back out of
//! Confirmed or Rejected. The machine still enumerates the graph so
//! the full connectivity is stated (and tested) rather than implied.

use serde::{Deserialize, Serialize};

/// Review status of a registration
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default,
)]
#[sqlx(type_name = "registration_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// Every registration starts here, regardless of input.
    #[default]
    Pending,
    Confirmed,
    Rejected,
}

impl RegistrationStatus {
    pub const ALL: [RegistrationStatus; 3] = [Self::Pending, Self::Confirmed, Self::Rejected];

    /// All statuses reachable from the current one.
    pub fn valid_transitions(&self) -> &'static [RegistrationStatus] {
        match self {
            Self::Pending => &[Self::Confirmed, Self::Rejected],
            Self::Confirmed => &[Self::Pending, Self::Rejected],
            Self::Rejected => &[Self::Pending, Self::Confirmed],
        }
    }

    /// Whether staff may relabel from `self` to `next`. Always true
    /// for distinct statuses; a same-status write is a no-op relabel
    /// and also allowed.
    pub fn can_transition_to(&self, next: RegistrationStatus) -> bool {
        *self == next || self.valid_transitions().contains(&next)
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}
