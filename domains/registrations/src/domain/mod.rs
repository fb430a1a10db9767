//! Domain model for the registrations domain

pub mod entities;
pub mod state;

pub use entities::{
    Participant, ParticipantKey, Registration, RegistrationPolicy, RegistrationRequest,
    RegistrationRow,
};
pub use state::RegistrationStatus;
