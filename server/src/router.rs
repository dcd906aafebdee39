use std::{path::Path, sync::Arc};

use axum::{Router, response::Html, routing::get};

use crate::{api::new_api_router, db::interface::DatabaseClient, ui::new_ui_server};

/// Builds the complete application: the greeting at `/`, the API under `/api`, and the static
/// frontend for every other path.
pub fn new_router(db: Arc<dyn DatabaseClient>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(|| async { Html("<h1>Hello World!</h1>") }))
        .nest("/api", new_api_router(db))
        .fallback_service(new_ui_server(static_dir))
}
