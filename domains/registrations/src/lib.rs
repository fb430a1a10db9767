//! Registrations domain: participants, event registrations, status review

pub mod actions;
pub mod api;
pub mod domain;
pub mod repository;
pub mod testing;

pub use domain::{
    Participant, ParticipantKey, Registration, RegistrationPolicy, RegistrationRequest,
    RegistrationRow, RegistrationStatus,
};
pub use repository::{PgRegistrationStore, RegistrationStore};

pub use actions::RegistrationsState;
pub use api::{routes, RegistrationsApiState};
