//! API layer for the registrations domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::RegistrationsApiState;
pub use routes::routes;
