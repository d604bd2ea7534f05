//! Service status: `/` for the API banner, `/ready` for the store check.

use crate::error::{AppError, StoreError};
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    version: &'static str,
}

async fn root() -> Json<StatusBody> {
    Json(StatusBody {
        status: "API is online!",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// 200 while the gateway answers `SELECT 1`; otherwise the usual 503 error body.
async fn ready(State(state): State<AppState>) -> Result<Json<StatusBody>, AppError> {
    if !state.db.ping().await {
        return Err(StoreError::NotConnected.into());
    }
    Ok(Json(StatusBody {
        status: "ready",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/ready", get(ready))
        .with_state(state)
}
