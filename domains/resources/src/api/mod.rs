//! API layer for the resources domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::ResourcesApiState;
pub use routes::routes;
