//! Route definitions for the resources domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use super::middleware::ResourcesApiState;

/// Create all resources domain API routes
pub fn routes() -> Router<ResourcesApiState> {
    Router::new()
        .route(
            "/v1/resources",
            get(handlers::list_resources).post(handlers::create_resource),
        )
        .route("/v1/admin/resources", get(handlers::list_all_resources))
        .route(
            "/v1/resources/{id}",
            axum::routing::patch(handlers::update_resource).delete(handlers::delete_resource),
        )
        .route(
            "/v1/resources/{id}/toggle-status",
            post(handlers::toggle_resource_status),
        )
        .route(
            "/v1/resources/{id}/toggle-featured",
            post(handlers::toggle_resource_featured),
        )
}
