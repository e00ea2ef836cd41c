use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/events",
            get(handlers::events::list).post(handlers::events::create),
        )
        .route("/events/upcoming", get(handlers::events::upcoming))
        .route("/events/my-events", get(handlers::events::my_events))
        .route(
            "/events/:id",
            get(handlers::events::get)
                .put(handlers::events::update)
                .delete(handlers::events::remove),
        )
        .route(
            "/venues",
            get(handlers::venues::list).post(handlers::venues::create),
        )
        .route(
            "/venues/:id",
            get(handlers::venues::get)
                .put(handlers::venues::update)
                .delete(handlers::venues::remove),
        )
        .route(
            "/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route("/users/email/:email", get(handlers::users::get_by_email))
        .route(
            "/users/:id",
            get(handlers::users::get)
                .put(handlers::users::update)
                .delete(handlers::users::remove),
        )
        .route("/registrations", post(handlers::registrations::book))
        .route(
            "/registrations/my-bookings",
            get(handlers::registrations::my_bookings),
        )
        .route(
            "/registrations/has-booked/:event_id",
            get(handlers::registrations::has_booked),
        )
        .route(
            "/registrations/:id/invoice",
            get(handlers::registrations::invoice),
        )
        .route("/dashboard/stats", get(handlers::dashboard::stats))
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .with_state(state)
}
