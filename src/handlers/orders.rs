//! Order handlers: create, list, read. There is no update or delete.

use crate::error::AppError;
use crate::model::NewOrder;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(state.orders.list_all().await)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewOrder>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    RequestValidator::validate_order(&body)?;
    let id = state.orders.create(&body).await.map_err(|e| {
        AppError::rejected(e, format!("could not register order; client {} may not exist", body.client_id))
    })?;
    let row = state
        .orders
        .get_by_id(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("order {} not found", id)))?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let row = state
        .orders
        .get_by_id(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("order {} not found", id)))?;
    Ok((StatusCode::OK, Json(row)))
}
