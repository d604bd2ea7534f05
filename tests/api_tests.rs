// HTTP surface: status codes and bodies for client and order routes.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use client_orders::{app, AppState, Database};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn make_app() -> (Router, AppState) {
    let state = AppState::new(common::setup_test_db().await);
    (app(state.clone()), state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn client_body(name: &str, email: &str, phone: &str) -> Value {
    json!({ "name": name, "email": email, "phone": phone })
}

#[tokio::test]
async fn test_root_reports_status() {
    let (app, _) = make_app().await;
    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "API is online!");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_ready_when_store_answers() {
    let (app, _) = make_app().await;
    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_ready_unavailable_without_connection() {
    let app = app(AppState::new(Arc::new(Database::new("sqlite::memory:"))));
    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "database_unavailable");
}

#[tokio::test]
async fn test_create_returns_store_assigned_record() {
    let (app, state) = make_app().await;
    state
        .clients
        .create(&client_orders::NewClient::new("Seed", "seed@x.com", "000"))
        .await
        .unwrap();

    let (status, body) = send(&app, "POST", "/clients/", Some(client_body("A", "a@x.com", "111"))).await;

    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().unwrap();
    let stored = state.clients.get_by_id(id).await.unwrap();
    assert_eq!(stored.email, "a@x.com");
    assert_eq!(body, json!({ "id": id, "name": "A", "email": "a@x.com", "phone": "111" }));
}

#[tokio::test]
async fn test_create_duplicate_email_is_bad_request() {
    let (app, state) = make_app().await;
    send(&app, "POST", "/clients", Some(client_body("A", "a@x.com", "111"))).await;

    let (status, body) = send(&app, "POST", "/clients", Some(client_body("B", "a@x.com", "222"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
    assert_eq!(state.clients.list_all().await.len(), 1);
}

#[tokio::test]
async fn test_create_with_blank_name_is_unprocessable() {
    let (app, _) = make_app().await;
    let (status, body) = send(&app, "POST", "/clients/", Some(client_body("", "a@x.com", "111"))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_list_and_read_clients() {
    let (app, _) = make_app().await;
    send(&app, "POST", "/clients/", Some(client_body("A", "a@x.com", "111"))).await;
    send(&app, "POST", "/clients/", Some(client_body("B", "b@x.com", "222"))).await;

    let (status, body) = send(&app, "GET", "/clients/", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "A");
    assert_eq!(list[1]["name"], "B");

    let id = list[1]["id"].as_i64().unwrap();
    let (status, body) = send(&app, "GET", &format!("/clients/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "b@x.com");
}

#[tokio::test]
async fn test_read_missing_client_is_not_found() {
    let (app, _) = make_app().await;
    let (status, body) = send(&app, "GET", "/clients/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_update_missing_client_is_not_found_even_though_store_would_succeed() {
    let (app, state) = make_app().await;

    let (status, _) = send(&app, "PUT", "/clients/123", Some(client_body("X", "x@x.com", "1"))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(state.clients.list_all().await.is_empty());
}

#[tokio::test]
async fn test_update_returns_new_state() {
    let (app, _) = make_app().await;
    let (_, created) = send(&app, "POST", "/clients/", Some(client_body("A", "a@x.com", "111"))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/clients/{}", id),
        Some(client_body("Alice", "alice@x.com", "999")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": id, "name": "Alice", "email": "alice@x.com", "phone": "999" }));
}

#[tokio::test]
async fn test_update_into_taken_email_is_bad_request() {
    let (app, _) = make_app().await;
    send(&app, "POST", "/clients/", Some(client_body("A", "a@x.com", "111"))).await;
    let (_, b) = send(&app, "POST", "/clients/", Some(client_body("B", "b@x.com", "222"))).await;
    let id = b["id"].as_i64().unwrap();

    let (status, _) = send(&app, "PUT", &format!("/clients/{}", id), Some(client_body("B", "a@x.com", "222"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_client_then_not_found() {
    let (app, _) = make_app().await;
    let (_, created) = send(&app, "POST", "/clients/", Some(client_body("A", "a@x.com", "111"))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/clients/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains(&id.to_string()));

    let (status, _) = send(&app, "DELETE", &format!("/clients/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", &format!("/clients/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_deletes_report_one_removal() {
    let (app, state) = make_app().await;
    for round in 0..20 {
        let email = format!("c{}@x.com", round);
        let (_, created) = send(&app, "POST", "/clients/", Some(client_body("C", &email, "111"))).await;
        let uri = format!("/clients/{}", created["id"].as_i64().unwrap());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let app = app.clone();
            let uri = uri.clone();
            handles.push(tokio::spawn(async move { send(&app, "DELETE", &uri, None).await.0 }));
        }
        let mut removed = 0;
        for handle in handles {
            let status = handle.await.unwrap();
            if status == StatusCode::OK {
                removed += 1;
            } else {
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
        }
        assert_eq!(removed, 1, "round {}", round);
    }
    assert!(state.clients.list_all().await.is_empty());
}

#[tokio::test]
async fn test_update_after_concurrent_removal_is_not_found() {
    let (app, state) = make_app().await;
    let (_, created) = send(&app, "POST", "/clients/", Some(client_body("A", "a@x.com", "111"))).await;
    let id = created["id"].as_i64().unwrap();
    state.clients.delete(id).await.unwrap();

    let (status, body) = send(&app, "PUT", &format!("/clients/{}", id), Some(client_body("B", "b@x.com", "2"))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_orders_create_read_and_list() {
    let (app, _) = make_app().await;
    let (_, client) = send(&app, "POST", "/clients/", Some(client_body("A", "a@x.com", "111"))).await;
    let client_id = client["id"].as_i64().unwrap();

    let (status, order) = send(
        &app,
        "POST",
        "/orders/",
        Some(json!({ "client_id": client_id, "product": "Widget", "amount": 9.99, "date": "2024-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["client_name"], "A");
    assert_eq!(order["amount"], 9.99);

    send(
        &app,
        "POST",
        "/orders",
        Some(json!({ "client_id": client_id, "product": "Gadget", "amount": 1.5, "date": "2024-02-15" })),
    )
    .await;

    let (status, list) = send(&app, "GET", "/orders/", None).await;
    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = list.as_array().unwrap().iter().map(|o| o["date"].as_str().unwrap()).collect();
    assert_eq!(dates, vec!["2024-02-15", "2024-01-01"]);

    let id = order["id"].as_i64().unwrap();
    let (status, body) = send(&app, "GET", &format!("/orders/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"], "Widget");
}

#[tokio::test]
async fn test_order_for_unknown_client_is_bad_request() {
    let (app, state) = make_app().await;
    let (status, _) = send(
        &app,
        "POST",
        "/orders/",
        Some(json!({ "client_id": 77, "product": "Widget", "amount": 1.0, "date": "2024-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(state.orders.list_all().await.is_empty());
}

#[tokio::test]
async fn test_order_with_non_iso_date_is_unprocessable() {
    let (app, _) = make_app().await;
    let (_, client) = send(&app, "POST", "/clients/", Some(client_body("A", "a@x.com", "111"))).await;
    let (status, _) = send(
        &app,
        "POST",
        "/orders/",
        Some(json!({ "client_id": client["id"], "product": "Widget", "amount": 1.0, "date": "01/02/2024" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_orders_have_no_delete_route() {
    let (app, _) = make_app().await;
    let (status, _) = send(&app, "DELETE", "/orders/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_mutations_without_connection_are_unavailable() {
    let app = app(AppState::new(Arc::new(Database::new("sqlite::memory:"))));
    let (status, body) = send(&app, "POST", "/clients/", Some(client_body("A", "a@x.com", "111"))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "database_unavailable");
}
