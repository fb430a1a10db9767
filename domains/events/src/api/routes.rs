//! Route definitions for the events domain API

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{competitions, events};
use super::middleware::EventsApiState;

/// Create event routes
fn event_routes() -> Router<EventsApiState> {
    Router::new()
        .route("/v1/events", get(events::list_events).post(events::create_event))
        .route("/v1/admin/events", get(events::list_all_events))
        .route(
            "/v1/events/{id}",
            get(events::get_event)
                .patch(events::update_event)
                .delete(events::delete_event),
        )
        .route("/v1/events/{id}/toggle", post(events::toggle_event_status))
}

/// Create competition routes
fn competition_routes() -> Router<EventsApiState> {
    Router::new()
        .route(
            "/v1/events/{event_id}/competitions",
            get(competitions::list_competitions),
        )
        .route(
            "/v1/events/{event_id}/competitions/order",
            put(competitions::update_competition_order),
        )
        .route("/v1/competitions", post(competitions::create_competition))
        .route(
            "/v1/competitions/{id}",
            delete(competitions::delete_competition).patch(competitions::update_competition),
        )
        .route(
            "/v1/competitions/{id}/toggle",
            post(competitions::toggle_competition_status),
        )
}

/// Create all events domain API routes
pub fn routes() -> Router<EventsApiState> {
    Router::new().merge(event_routes()).merge(competition_routes())
}
