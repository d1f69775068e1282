//! HTTP transport integration tests.
//!
//! Starts an axum server on an ephemeral port and exercises it with reqwest.

use serde_json::{json, Value};
use user_registry::http;
use user_registry::lifecycle::UserSystem;
use user_registry::model::demo_users;

/// Bind to port 0 and return the base URL. The system is kept so the actor outlives the test body.
async fn start_server() -> (String, UserSystem) {
    let system = UserSystem::with_seed(32, demo_users()).unwrap();
    let app = http::router(system.user_client.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), system)
}

#[tokio::test]
async fn health_check() {
    let (base, _system) = start_server().await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn list_returns_seeded_users_in_order() {
    let (base, _system) = start_server().await;

    let resp = reqwest::get(format!("{base}/api/users")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "John Doe", "email": "john.doe@example.com" },
            { "id": 2, "name": "Jane Smith", "email": "jane.smith@example.com" }
        ])
    );
}

#[tokio::test]
async fn create_get_update_delete_roundtrip() {
    let (base, _system) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/users"))
        .json(&json!({ "name": "Sam", "email": "sam@x.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created, json!({ "id": 3, "name": "Sam", "email": "sam@x.com" }));

    let resp = client.get(format!("{base}/api/users/3")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json::<Value>().await.unwrap(), created);

    let resp = client
        .put(format!("{base}/api/users/3"))
        .json(&json!({ "email": "samuel@x.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(
        updated,
        json!({ "id": 3, "name": "Sam", "email": "samuel@x.com" })
    );

    let resp = client
        .delete(format!("{base}/api/users/3"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
    assert!(resp.bytes().await.unwrap().is_empty());

    let resp = client.get(format!("{base}/api/users/3")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn create_with_missing_fields_returns_400() {
    let (base, _system) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/users"))
        .json(&json!({ "email": "a@b.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["fields"], json!(["name"]));

    let resp = client
        .post(format!("{base}/api/users"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["fields"], json!(["name", "email"]));

    let users: Value = reqwest::get(format!("{base}/api/users"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_errors_map_to_status_codes() {
    let (base, _system) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/api/users/99"))
        .json(&json!({ "name": "X", "email": "y@z.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "User not found: 99");

    let resp = client
        .put(format!("{base}/api/users/1"))
        .json(&json!({ "name": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn delete_missing_returns_404() {
    let (base, _system) = start_server().await;

    let resp = reqwest::Client::new()
        .delete(format!("{base}/api/users/42"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn non_numeric_id_is_rejected_by_transport() {
    let (base, _system) = start_server().await;

    let resp = reqwest::get(format!("{base}/api/users/abc")).await.unwrap();
    assert_eq!(resp.status(), 400);
}
