//! Domain model for the resources domain

pub mod entities;

pub use entities::{Resource, ResourceDraft, ResourceStatus};
