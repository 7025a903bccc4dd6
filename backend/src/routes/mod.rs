//! Route definitions for the Herb Trace Platform

use axum::{middleware, routing::get, Router};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
///
/// Every route sees the viewer middleware. Requests without a token are
/// served as guests, so nothing here is closed to anonymous callers.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/access", get(handlers::check_access))
        .nest("/certification", certification_routes())
        .route("/farms/:farm_id", get(handlers::get_farm))
        .nest("/applications", application_routes())
        .route("/plants/:plant_id", get(handlers::get_plant_trace))
        .route("/packages/:package_id", get(handlers::get_package_trace))
        .route("/transactions", get(handlers::list_transactions))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Certification dashboard routes
fn certification_routes() -> Router<AppState> {
    Router::new()
        .route("/farmers", get(handlers::list_certified_farmers))
        .route("/farmers/export", get(handlers::export_certified_farmers))
        .route("/summary", get(handlers::certification_summary))
}

/// Certification application routes
fn application_routes() -> Router<AppState> {
    Router::new()
        .route("/gacp", get(handlers::list_gacp_applications))
        .route("/gacp/:application_id", get(handlers::get_gacp_application))
        .route("/optional", get(handlers::list_optional_applications))
}
