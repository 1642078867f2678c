mod error;
mod handlers;

use std::path::PathBuf;

use axum::{
    handler::Handler,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub use error::ApiError;

use crate::store::StudentStore;

/// Shared state injected into every handler: the record store plus the
/// directory static assets (and the 404 page) are served from.
#[derive(Clone)]
pub struct AppState {
    pub store: StudentStore,
    pub assets_dir: PathBuf,
}

pub fn create_router(store: StudentStore, assets_dir: PathBuf) -> Router {
    let state = AppState { store, assets_dir };

    let api = Router::new()
        .route("/students", get(handlers::list_students))
        .route("/students", post(handlers::create_student))
        .route("/students", put(handlers::update_student))
        .route("/students", delete(handlers::delete_student))
        .route("/students/{roll_number}", get(handlers::get_student))
        .route("/health", get(handlers::health))
        // An unlisted method on a registered path gets the not-found page,
        // same as an unmatched path.
        .method_not_allowed_fallback(handlers::not_found);

    // Anything outside /api goes through static file lookup first, then the
    // fixed not-found page.
    let static_files = ServeDir::new(&state.assets_dir)
        .not_found_service(handlers::not_found.with_state(state.clone()));

    Router::new()
        .nest("/api", api)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
