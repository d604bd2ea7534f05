//! Row and request shapes for clients and orders.

use serde::{Deserialize, Serialize};

/// A row of `clients`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Body for creating or fully overwriting a client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewClient {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        NewClient {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// An order joined with its client's name, as listed and reported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderSummary {
    pub id: i64,
    pub client_name: String,
    pub product: String,
    pub amount: f64,
    /// `YYYY-MM-DD`; ordering relies on the text sorting like the calendar.
    pub date: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewOrder {
    pub client_id: i64,
    pub product: String,
    pub amount: f64,
    pub date: String,
}

impl NewOrder {
    pub fn new(client_id: i64, product: impl Into<String>, amount: f64, date: impl Into<String>) -> Self {
        NewOrder {
            client_id,
            product: product.into(),
            amount,
            date: date.into(),
        }
    }
}
