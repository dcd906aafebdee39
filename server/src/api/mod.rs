use std::sync::Arc;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::db::interface::DatabaseClient;

mod error;
mod extractors;
mod notes;
mod users;
mod views;


pub use error::ApiError;

/// Maximum request payload size in bytes
const MAX_REQUEST_PAYLOAD_BYTES: usize = 8 * 1024; // 8 KiB

struct ApiStateInner {
    db: Arc<dyn DatabaseClient>,
}

type ApiState = Arc<ApiStateInner>;

/// Returns the router serving the notes and users API.
///
/// The routes are relative; the caller decides where to nest them (normally under `/api`).
pub fn new_api_router(db: Arc<dyn DatabaseClient>) -> Router<()> {
    let state = ApiStateInner { db };
    Router::new()
        .route("/health", get(|| async {}))
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route(
            "/notes/{id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route("/users", get(users::list_users).post(users::create_user))
        .with_state(Arc::new(state))
        .layer(
            // order is top to bottom
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_REQUEST_PAYLOAD_BYTES))
                // Cors needs a `Default` response body, which the limit layer's body is not
                .layer(CorsLayer::permissive()),
        )
}
