//! Shared utilities, configuration, and error handling for Clubdesk
//!
//! This crate provides common functionality used across the Clubdesk application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - The action-result envelope returned by every mutation action

pub mod config;
pub mod db;
pub mod envelope;
pub mod error;

pub use config::Config;
pub use db::RepositoryError;
pub use envelope::{ActionError, ActionResult};
pub use error::{Error, ErrorKind, Result};
