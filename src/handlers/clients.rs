//! Client handlers: create, list, read, update, delete.
//! Update and delete look the client up first, then require the statement itself to have matched a row.

use crate::error::AppError;
use crate::model::{Client, NewClient};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct Deleted {
    pub message: String,
}

fn missing(id: i64) -> AppError {
    AppError::NotFound(format!("client {} not found", id))
}

async fn existing(state: &AppState, id: i64) -> Result<Client, AppError> {
    state.clients.get_by_id(id).await.ok_or_else(|| missing(id))
}

pub async fn list(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(state.clients.list_all().await)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewClient>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    RequestValidator::validate_client(&body)?;
    let id = state
        .clients
        .create(&body)
        .await
        .map_err(|e| AppError::rejected(e, "could not register client; the email may already be in use"))?;
    let row = existing(&state, id).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let row = existing(&state, id).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<NewClient>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    existing(&state, id).await?;
    RequestValidator::validate_client(&body)?;
    state
        .clients
        .update(id, &body)
        .await
        .map_err(|e| AppError::rejected(e, "could not update client"))?
        .matched()
        .map_err(|_| missing(id))?;
    let row = existing(&state, id).await?;
    Ok((StatusCode::OK, Json(row)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    existing(&state, id).await?;
    state.clients.delete(id).await?.matched().map_err(|_| missing(id))?;
    Ok((
        StatusCode::OK,
        Json(Deleted {
            message: format!("client {} removed", id),
        }),
    ))
}
