//! CRUD over the `clients` table.

use crate::error::StoreError;
use crate::model::{Client, NewClient};
use crate::report;
use crate::store::{Database, Executed};
use std::sync::Arc;

#[derive(Clone)]
pub struct ClientRepository {
    db: Arc<Database>,
}

impl ClientRepository {
    pub fn new(db: Arc<Database>) -> Self {
        ClientRepository { db }
    }

    /// Insert a client and return its store-assigned id. Fails on a duplicate email.
    pub async fn create(&self, client: &NewClient) -> Result<i64, StoreError> {
        let done = self
            .db
            .execute(
                "INSERT INTO clients (name, email, phone) VALUES (?, ?, ?)",
                &[
                    client.name.as_str().into(),
                    client.email.as_str().into(),
                    client.phone.as_str().into(),
                ],
            )
            .await?;
        tracing::info!(id = done.last_insert_id, "client '{}' registered", client.name);
        Ok(done.last_insert_id)
    }

    pub async fn list_all(&self) -> Vec<Client> {
        self.db
            .fetch_all("SELECT id, name, email, phone FROM clients ORDER BY id", &[])
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Option<Client> {
        self.db
            .fetch_one("SELECT id, name, email, phone FROM clients WHERE id = ?", &[id.into()])
            .await
    }

    /// Overwrite every column of a client. An unknown id still succeeds with zero
    /// affected rows; callers that care must look the client up first.
    pub async fn update(&self, id: i64, client: &NewClient) -> Result<Executed, StoreError> {
        let done = self
            .db
            .execute(
                "UPDATE clients SET name = ?, email = ?, phone = ? WHERE id = ?",
                &[
                    client.name.as_str().into(),
                    client.email.as_str().into(),
                    client.phone.as_str().into(),
                    id.into(),
                ],
            )
            .await?;
        tracing::info!(id, rows = done.rows_affected, "client updated");
        Ok(done)
    }

    /// Delete a client; its orders go with it (ON DELETE CASCADE).
    pub async fn delete(&self, id: i64) -> Result<Executed, StoreError> {
        let done = self
            .db
            .execute("DELETE FROM clients WHERE id = ?", &[id.into()])
            .await?;
        tracing::info!(id, rows = done.rows_affected, "client removed");
        Ok(done)
    }

    pub async fn report(&self) -> String {
        report::render_clients(&self.list_all().await)
    }

    pub async fn render_report(&self) {
        print!("{}", self.report().await);
    }
}
