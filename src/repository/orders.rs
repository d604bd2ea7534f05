//! Create and read over the `orders` table. Orders cannot be updated or deleted
//! individually; they only disappear with their client.

use crate::error::StoreError;
use crate::model::{NewOrder, OrderSummary};
use crate::report;
use crate::store::Database;
use std::sync::Arc;

const SELECT_JOINED: &str = "SELECT o.id, c.name AS client_name, o.product, o.amount, o.date \
     FROM orders o JOIN clients c ON o.client_id = c.id";

#[derive(Clone)]
pub struct OrderRepository {
    db: Arc<Database>,
}

impl OrderRepository {
    pub fn new(db: Arc<Database>) -> Self {
        OrderRepository { db }
    }

    /// Insert an order and return its id. Fails with a constraint violation when
    /// `client_id` does not reference an existing client.
    pub async fn create(&self, order: &NewOrder) -> Result<i64, StoreError> {
        let done = self
            .db
            .execute(
                "INSERT INTO orders (client_id, product, amount, date) VALUES (?, ?, ?, ?)",
                &[
                    order.client_id.into(),
                    order.product.as_str().into(),
                    order.amount.into(),
                    order.date.as_str().into(),
                ],
            )
            .await?;
        tracing::info!(
            id = done.last_insert_id,
            client_id = order.client_id,
            "order registered"
        );
        Ok(done.last_insert_id)
    }

    /// Newest first. `date` is compared as text.
    pub async fn list_all(&self) -> Vec<OrderSummary> {
        self.db
            .fetch_all(&format!("{} ORDER BY o.date DESC", SELECT_JOINED), &[])
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Option<OrderSummary> {
        self.db
            .fetch_one(&format!("{} WHERE o.id = ?", SELECT_JOINED), &[id.into()])
            .await
    }

    pub async fn report(&self) -> String {
        report::render_orders(&self.list_all().await)
    }

    pub async fn render_report(&self) {
        print!("{}", self.report().await);
    }
}
