//! Client and order records over SQLite, served as terminal reports and a REST API.

pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod report;
pub mod repository;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError, StoreError, StoreErrorKind};
pub use model::{Client, NewClient, NewOrder, OrderSummary};
pub use repository::{ClientRepository, OrderRepository};
pub use routes::{app, client_routes, common_routes, order_routes};
pub use sql::SqlValue;
pub use state::AppState;
pub use store::{Database, Executed};
