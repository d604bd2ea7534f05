//! Router assembly.

mod api;
mod common;

pub use api::{client_routes, order_routes};
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application: common, client and order routes with tracing and a body size cap.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(client_routes(state.clone()))
        .merge(order_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
