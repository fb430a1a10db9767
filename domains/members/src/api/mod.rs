//! API layer for the members domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::MembersApiState;
pub use routes::routes;
