pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export logic types
pub use logic::{
    catalog_stats, category_icon, code_sample_view, documentation_view, group_by_category,
    navigation_view, resolve_language,
};

// Export all model types
pub use model::*;

// Export error types
pub use error::{CatalogError, CatalogResult};

// Export seed module
pub use seed::*;

// Export store types
pub use store::{CatalogStore, InMemoryCatalogStore, SessionRegistry};

use anyhow::Context;
use axum::Router;
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::api::handlers::AppState;
use crate::config::{AppConfig, CatalogConfig};

/// How often idle sessions are swept
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Build the catalog from the configured file, or the bundled one when no
/// file is configured.
pub fn build_store(config: &CatalogConfig) -> anyhow::Result<InMemoryCatalogStore> {
    let apis = match &config.path {
        Some(path) => seed::load_catalog_from_path(path)?,
        None => seed::bundled_apis(),
    };
    InMemoryCatalogStore::new(apis, &config.default_api).context("catalog rejected")
}

/// Router with state, plus the static asset fallback when configured.
pub fn create_app(config: &AppConfig, sessions: Arc<SessionRegistry>) -> anyhow::Result<Router> {
    let store = Arc::new(build_store(&config.catalog)?);
    let mut router = routes::create_router::<InMemoryCatalogStore>();
    if let Some(dir) = &config.server.static_dir {
        info!("serving presentation assets from {}", dir);
        router = router.fallback_service(ServeDir::new(dir));
    }
    Ok(router.with_state(AppState::new(store, sessions)))
}

/// Serve on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, config: AppConfig) -> anyhow::Result<()> {
    let sessions = Arc::new(SessionRegistry::new(config.session_ttl()));
    let app = create_app(&config, Arc::clone(&sessions))?;

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            let dropped = sessions.clear_expired();
            if dropped > 0 {
                debug!("session sweep dropped {} sessions", dropped);
            }
        }
    });

    axum::serve(listener, app).await?;

    Ok(())
}

/// Bind the configured address and serve.
pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;
    info!("API reference viewer running on http://{}", bind_address);

    serve(listener, config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_open_set_deserialization() {
        // Known verbs are case-insensitive, anything else is carried through
        let json = r#"["get", "POST", "Delete", "PATCH", "OPTIONS"]"#;
        match serde_json::from_str::<Vec<HttpMethod>>(json) {
            Ok(methods) => {
                assert_eq!(methods[0], HttpMethod::Get);
                assert_eq!(methods[1], HttpMethod::Post);
                assert_eq!(methods[2], HttpMethod::Delete);
                assert_eq!(methods[3], HttpMethod::Patch);
                assert_eq!(methods[4].badge(), MethodBadge::Neutral);
            }
            Err(e) => panic!("✗ method list failed: {}", e),
        }
    }

    #[test]
    fn test_api_without_optional_sections() {
        let json = r#"{
            "key": "ledger",
            "title": "Ledger API",
            "description": "Ledger entries",
            "category": "   ",
            "authentication": {
                "type": "Bearer Token",
                "header": "Authorization: Bearer <token>",
                "content_type": "application/json"
            },
            "endpoints": []
        }"#;
        match serde_json::from_str::<Api>(json) {
            Ok(api) => {
                assert_eq!(api.category_name(), DEFAULT_CATEGORY);
                assert!(api.permissions.is_none());
                assert!(api.webhook_auth_types.is_none());
                assert!(api.authentication.api_key.is_none());
            }
            Err(e) => panic!("✗ minimal api failed: {}", e),
        }
    }

    #[test]
    fn test_parameter_examples_keep_json_types() {
        let json = r#"{"name": "headers", "type": "object", "required": false,
            "description": "Custom headers", "example": {"X-Customer-Id": "12345"}}"#;
        let field: BodyField = serde_json::from_str(json).unwrap();
        assert_eq!(
            field.example,
            Some(serde_json::json!({"X-Customer-Id": "12345"}))
        );
        let back = serde_json::to_value(&field).unwrap();
        assert_eq!(back["type"], "object");
    }

    #[test]
    fn test_build_store_uses_bundled_catalog_by_default() {
        let store = build_store(&CatalogConfig::default()).unwrap();
        assert_eq!(store.default_api().key.as_str(), DEFAULT_API_KEY);

        let unknown_default = CatalogConfig {
            path: None,
            default_api: "missing".to_string(),
        };
        let err = build_store(&unknown_default).unwrap_err();
        assert!(err.to_string().contains("catalog rejected"));
    }
}
