use axum::{
    routing::{get, post, put},
    Router,
};

use crate::api::handlers::{self, AppState};
use crate::store::CatalogStore;

pub fn create_router<S: CatalogStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Catalog reads
        .route("/catalog", get(handlers::list_catalog::<S>))
        .route("/stats", get(handlers::get_catalog_stats::<S>))
        .route("/catalog/:api_key", get(handlers::get_api::<S>))
        .route("/categories", get(handlers::list_categories::<S>))
        // Session lifecycle
        .route("/sessions", post(handlers::create_session::<S>))
        .route(
            "/sessions/:session_id",
            get(handlers::get_session::<S>).delete(handlers::delete_session::<S>),
        )
        // Selection changes
        .route("/sessions/:session_id/api", put(handlers::select_api::<S>))
        .route(
            "/sessions/:session_id/endpoint",
            put(handlers::select_endpoint::<S>).delete(handlers::clear_endpoint::<S>),
        )
        .route(
            "/sessions/:session_id/language",
            put(handlers::choose_language::<S>),
        )
        // Projections
        .route(
            "/sessions/:session_id/navigation",
            get(handlers::get_navigation::<S>),
        )
        .route(
            "/sessions/:session_id/documentation",
            get(handlers::get_documentation::<S>),
        )
        .route(
            "/sessions/:session_id/code-samples",
            get(handlers::get_code_samples::<S>),
        )
}
