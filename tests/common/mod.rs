use client_orders::{ClientRepository, Database, NewClient, OrderRepository};
use std::sync::Arc;

#[allow(dead_code)]
pub async fn setup_test_db() -> Arc<Database> {
    let db = Arc::new(Database::new("sqlite::memory:"));
    db.connect().await;
    db.initialize_schema().await.unwrap();
    db
}

#[allow(dead_code)]
pub async fn repos() -> (Arc<Database>, ClientRepository, OrderRepository) {
    let db = setup_test_db().await;
    (db.clone(), ClientRepository::new(db.clone()), OrderRepository::new(db))
}

#[allow(dead_code)]
pub async fn add_client(clients: &ClientRepository, name: &str, email: &str) -> i64 {
    clients.create(&NewClient::new(name, email, "111")).await.unwrap()
}
