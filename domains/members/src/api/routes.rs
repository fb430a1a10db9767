//! Route definitions for the members domain API

use axum::{routing::get, Router};

use super::handlers;
use super::middleware::MembersApiState;

/// Create all members domain API routes
pub fn routes() -> Router<MembersApiState> {
    Router::new()
        .route(
            "/v1/members",
            get(handlers::list_members).post(handlers::create_member),
        )
        .route(
            "/v1/members/{id}",
            axum::routing::patch(handlers::update_member).delete(handlers::delete_member),
        )
}
