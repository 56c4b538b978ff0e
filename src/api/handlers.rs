use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Json as RequestJson,
};
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::CatalogError;
use crate::logic::{
    catalog_stats, code_sample_view, documentation_view, group_by_category, navigation_view,
};
use crate::model::{CatalogStats, CodeSampleView, Session};
use crate::store::{CatalogStore, SessionRegistry};

/// Shared state: the immutable catalog plus the live viewer sessions.
pub struct AppState<S> {
    pub store: Arc<S>,
    pub sessions: Arc<SessionRegistry>,
}

impl<S> AppState<S> {
    pub fn new(store: Arc<S>, sessions: Arc<SessionRegistry>) -> Self {
        Self { store, sessions }
    }
}

// Manual impl so `S` itself need not be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            sessions: Arc::clone(&self.sessions),
        }
    }
}

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a domain error onto its HTTP status.
pub fn error_response(err: CatalogError) -> ApiError {
    let status = match &err {
        CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
        CatalogError::InvalidReference(_) => {
            warn!("rejected selection change: {}", err);
            StatusCode::UNPROCESSABLE_ENTITY
        }
        CatalogError::InvalidCatalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::new(&err.to_string())))
}

#[derive(Debug, Deserialize)]
pub struct SelectApiRequest {
    pub api_key: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectEndpointRequest {
    pub endpoint_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ChooseLanguageRequest {
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct CodeSampleQuery {
    /// Show the response example for this status instead of the default one
    pub status: Option<String>,
}

// Catalog reads

pub async fn list_catalog<S: CatalogStore>(State(state): State<AppState<S>>) -> Response {
    Json(state.store.get_all()).into_response()
}

pub async fn get_catalog_stats<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> Json<CatalogStats> {
    Json(catalog_stats(state.store.get_all()))
}

pub async fn get_api<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(api_key): Path<String>,
) -> Result<Response, ApiError> {
    let api = state.store.get_by_key(&api_key).map_err(error_response)?;
    Ok(Json(api).into_response())
}

pub async fn list_categories<S: CatalogStore>(State(state): State<AppState<S>>) -> Response {
    Json(group_by_category(state.store.get_all())).into_response()
}

// Sessions

pub async fn create_session<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> Result<(StatusCode, Json<Session>), ApiError> {
    let default_api = state.store.default_api().key.as_str();
    let session = state
        .sessions
        .create(state.store.get_all(), default_api)
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn get_session<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(session_id): Path<String>,
) -> Result<Json<Session>, ApiError> {
    let session = state.sessions.get(&session_id).map_err(error_response)?;
    Ok(Json(session))
}

pub async fn delete_session<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.remove(&session_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(error_response(CatalogError::session_not_found(&session_id)))
    }
}

pub async fn select_api<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(session_id): Path<String>,
    RequestJson(request): RequestJson<SelectApiRequest>,
) -> Result<Json<Session>, ApiError> {
    let catalog = state.store.get_all();
    let session = state
        .sessions
        .with_session(&session_id, |session| {
            session.select_api(catalog, &request.api_key)?;
            Ok(session.clone())
        })
        .map_err(error_response)?;
    Ok(Json(session))
}

pub async fn select_endpoint<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(session_id): Path<String>,
    RequestJson(request): RequestJson<SelectEndpointRequest>,
) -> Result<Json<Session>, ApiError> {
    let catalog = state.store.get_all();
    let session = state
        .sessions
        .with_session(&session_id, |session| {
            session.select_endpoint(catalog, &request.endpoint_id)?;
            Ok(session.clone())
        })
        .map_err(error_response)?;
    Ok(Json(session))
}

pub async fn clear_endpoint<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(session_id): Path<String>,
) -> Result<Json<Session>, ApiError> {
    let session = state
        .sessions
        .with_session(&session_id, |session| {
            session.clear_endpoint();
            Ok(session.clone())
        })
        .map_err(error_response)?;
    Ok(Json(session))
}

pub async fn choose_language<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(session_id): Path<String>,
    RequestJson(request): RequestJson<ChooseLanguageRequest>,
) -> Result<Json<Session>, ApiError> {
    let catalog = state.store.get_all();
    let session = state
        .sessions
        .with_session(&session_id, |session| {
            session.choose_language(catalog, &request.language)?;
            Ok(session.clone())
        })
        .map_err(error_response)?;
    Ok(Json(session))
}

// Projections

pub async fn get_navigation<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(session_id): Path<String>,
) -> Result<Response, ApiError> {
    let session = state.sessions.get(&session_id).map_err(error_response)?;
    let view = navigation_view(state.store.get_all(), session.selection());
    Ok(Json(view).into_response())
}

pub async fn get_documentation<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(session_id): Path<String>,
) -> Result<Response, ApiError> {
    let session = state.sessions.get(&session_id).map_err(error_response)?;
    let view = documentation_view(state.store.get_all(), session.selection());
    Ok(Json(view).into_response())
}

pub async fn get_code_samples<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(session_id): Path<String>,
    Query(query): Query<CodeSampleQuery>,
) -> Result<Response, ApiError> {
    let session = state.sessions.get(&session_id).map_err(error_response)?;
    let mut view = code_sample_view(
        state.store.get_all(),
        session.selection(),
        session.language(),
    );
    if let (CodeSampleView::Samples(samples), Some(status)) = (&mut view, query.status.as_deref())
    {
        samples.response_sample = samples.response_sample_for(status);
    }
    Ok(Json(view).into_response())
}
