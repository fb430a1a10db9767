//! Domain model for the events domain

pub mod entities;

pub use entities::{
    validate_order_submission, Competition, CompetitionDraft, CompetitionOrder, Event, EventDraft,
    EventMode,
};
