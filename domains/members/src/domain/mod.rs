//! Domain model for the members domain

pub mod entities;

pub use entities::{Member, MemberDraft};
