//! Catalog read routes.
//!
//! Both product routes serve only rows whose status `is_active()`, whatever
//! the `Catalog` implementation behind them returned.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use catalog::{Collection, Product, StoreSettings};

use crate::backend::BackendError;
use crate::state::AppState;

pub(crate) fn backend_error_to_status(err: &BackendError) -> StatusCode {
    match err {
        BackendError::Request(_) | BackendError::Status { .. } => StatusCode::BAD_GATEWAY,
        BackendError::Parse(_) | BackendError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_backend_error(op: &'static str, err: BackendError) -> StatusCode {
    if let BackendError::Status { status, body } = &err {
        tracing::warn!(op, status, body = %body, "catalog backend rejected request");
    } else {
        tracing::error!(op, error = %err, "catalog backend request failed");
    }
    backend_error_to_status(&err)
}

/// `GET /api/products`: active products, newest first.
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, StatusCode> {
    let mut products = state
        .catalog
        .active_products()
        .await
        .map_err(|e| log_backend_error("list_products", e))?;
    products.retain(|p| p.status.is_active());
    tracing::debug!(count = products.len(), "listed active products");
    Ok(Json(products))
}

/// `GET /api/products/{slug}`: one active product, or 404.
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>, StatusCode> {
    let product = state
        .catalog
        .product_by_slug(&slug)
        .await
        .map_err(|e| log_backend_error("get_product", e))?
        .filter(|p| p.status.is_active())
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(product))
}

/// `GET /api/collections`: active collections.
pub async fn list_collections(State(state): State<AppState>) -> Result<Json<Vec<Collection>>, StatusCode> {
    let collections = state
        .catalog
        .active_collections()
        .await
        .map_err(|e| log_backend_error("list_collections", e))?;
    Ok(Json(collections))
}

/// `GET /api/settings`: store name, money format and gallery tuning.
pub async fn get_settings(State(state): State<AppState>) -> Json<StoreSettings> {
    Json(state.settings.as_ref().clone())
}
