//! Course Server
//!
//! HTTP front for the course registry. Routes requests to the matching
//! registry operation and serializes results as JSON; the registry itself
//! lives in the `course-registry` crate with a memory and a sqlite backend.

pub mod config;
pub mod handlers;

use axum::{
    routing::get,
    Router,
};
use course_registry::CourseRegistry;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn CourseRegistry>,
}

/// Build the router with all routes and layers attached.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/courses",
            get(handlers::courses::list).post(handlers::courses::create),
        )
        .route(
            "/courses/:id",
            get(handlers::courses::get)
                .put(handlers::courses::update)
                .delete(handlers::courses::delete),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
