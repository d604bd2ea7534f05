//! Shared application state for all routes. Every handle points at the same gateway.

use crate::repository::{ClientRepository, OrderRepository};
use crate::store::Database;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub clients: ClientRepository,
    pub orders: OrderRepository,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        AppState {
            clients: ClientRepository::new(db.clone()),
            orders: OrderRepository::new(db.clone()),
            db,
        }
    }
}
