//! Route definitions for the registrations domain API

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers;
use super::middleware::RegistrationsApiState;

/// Create all registrations domain API routes
pub fn routes() -> Router<RegistrationsApiState> {
    Router::new()
        .route("/v1/registrations", post(handlers::register_for_event))
        .route(
            "/v1/registrations/status",
            get(handlers::get_registration_status),
        )
        .route(
            "/v1/registrations/{id}/status",
            patch(handlers::update_participant_status),
        )
        .route(
            "/v1/admin/events/{event_id}/registrations",
            get(handlers::list_event_registrations),
        )
        .route(
            "/v1/participants/{participant_id}/events/{event_id}/status",
            patch(handlers::update_all_participant_statuses),
        )
}
