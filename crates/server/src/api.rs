//! Routes, handlers, and error-to-status mapping.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use catalog_core::Item;
use catalog_storage::{Database, ItemStore, StorageError};
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;

/// Shared handler state: the process-wide database handle.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

/// Build the router over the given database handle.
pub fn app(db: Arc<Database>) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .layer(CorsLayer::permissive())
        .with_state(AppState { db })
}

/// Handler-level failures, mapped to response statuses.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("no item with id {0}")]
    NotFound(String),

    #[error("invalid item payload: {0}")]
    BadRequest(#[source] JsonRejection),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}

async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = ItemStore::new(&state.db).get_all()?;
    tracing::info!(count = items.len(), "listed items");
    Ok(Json(items))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    match ItemStore::new(&state.db).get(&id)? {
        Some(item) => {
            tracing::info!(%id, "fetched item");
            Ok(Json(item))
        }
        None => Err(ApiError::NotFound(id)),
    }
}

async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(item) = payload.map_err(ApiError::BadRequest)?;
    ItemStore::new(&state.db).create(&item)?;
    tracing::info!(id = %item.id, "created item");
    Ok(StatusCode::CREATED)
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(item) = payload.map_err(ApiError::BadRequest)?;
    ItemStore::new(&state.db).update(&id, &item)?;
    tracing::info!(%id, "updated item");
    Ok(StatusCode::OK)
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    ItemStore::new(&state.db).delete(&id)?;
    tracing::info!(%id, "deleted item");
    Ok(StatusCode::OK)
}
