//! Client and order routes. Collection paths answer with and without a trailing slash.

use crate::handlers::{clients, orders};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn client_routes(state: AppState) -> Router {
    Router::new()
        .route("/clients", get(clients::list).post(clients::create))
        .route("/clients/", get(clients::list).post(clients::create))
        .route(
            "/clients/:id",
            get(clients::read).put(clients::update).delete(clients::delete),
        )
        .with_state(state)
}

/// Orders are create/read only.
pub fn order_routes(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/", get(orders::list).post(orders::create))
        .route("/orders/:id", get(orders::read))
        .with_state(state)
}
