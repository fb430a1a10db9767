//! API handlers for the events domain

pub mod competitions;
pub mod events;
