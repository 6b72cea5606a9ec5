//! HTTP contract tests for the gateway, run against an in-process server.

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use meridian_gateway::{create_router, GatewayConfig, GatewayState};
use meridian_store::MemoryStore;

const ADMIN_TOKEN: &str = "test-admin-token";

fn server_with(config: GatewayConfig) -> TestServer {
    let state = GatewayState::new(Arc::new(MemoryStore::new()), config);
    TestServer::new(create_router(state)).unwrap()
}

fn server() -> TestServer {
    server_with(GatewayConfig {
        admin_token: Some(ADMIN_TOKEN.to_string()),
        ..GatewayConfig::default()
    })
}

fn authorization(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("authorization"),
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    )
}

fn form(first_name: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": "Doe",
        "email": format!("{}@example.com", first_name.to_lowercase()),
        "phone": "",
        "company": "Initech",
        "companySize": "51-200",
        "serviceInterest": "compliance",
        "message": "Please call me about an HR audit."
    })
}

async fn submit(server: &TestServer, first_name: &str) -> Value {
    let response = server.post("/api/inquiries").json(&form(first_name)).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn health_is_public() {
    let server = server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["inquiries"], 0);
}

#[tokio::test]
async fn submit_inquiry_returns_stored_record() {
    let server = server();

    let body = submit(&server, "Alice").await;

    assert_eq!(body["id"], 1);
    assert_eq!(body["firstName"], "Alice");
    assert_eq!(body["companySize"], "51-200");
    assert!(body.get("phone").is_none(), "blank optional fields are dropped");
    assert!(body["createdAt"].as_str().is_some());

    let second = submit(&server, "Bob").await;
    assert_eq!(second["id"], 2);

    let health = server.get("/health").await.json::<Value>();
    assert_eq!(health["inquiries"], 2);
}

#[tokio::test]
async fn submit_rejects_missing_required_field() {
    let server = server();

    let mut body = form("Alice");
    body["email"] = json!("   ");

    let response = server.post("/api/inquiries").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let error = response.json::<Value>();
    assert_eq!(error["error"]["code"], "bad_request");
    assert_eq!(error["error"]["message"], "bad request: email is required");
}

#[tokio::test]
async fn submit_rejects_malformed_json() {
    let server = server();

    let response = server
        .post("/api/inquiries")
        .json(&json!({ "firstName": "Only" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "bad_request");
}

#[tokio::test]
async fn list_requires_admin_token() {
    let server = server();
    submit(&server, "Alice").await;

    server
        .get("/api/inquiries")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let (name, value) = authorization("wrong");
    server
        .get("/api/inquiries")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_endpoints_disabled_without_token() {
    let server = server_with(GatewayConfig::default());

    let (name, value) = authorization("anything");
    let response = server.get("/api/inquiries").add_header(name, value).await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["error"]["code"], "forbidden");
}

#[tokio::test]
async fn list_is_newest_first() {
    let server = server();
    for name in ["A", "B", "C"] {
        submit(&server, name).await;
    }

    let (name, value) = authorization(ADMIN_TOKEN);
    let response = server.get("/api/inquiries").add_header(name, value).await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    let inquiries = body["inquiries"].as_array().unwrap();
    assert_eq!(inquiries.len(), 3);

    let created: Vec<DateTime<Utc>> = inquiries
        .iter()
        .map(|i| i["createdAt"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(created.windows(2).all(|w| w[0] >= w[1]));

    let ids: Vec<u64> = inquiries.iter().map(|i| i["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn get_single_inquiry() {
    let server = server();
    submit(&server, "A").await;
    let b = submit(&server, "B").await;

    let (name, value) = authorization(ADMIN_TOKEN);
    let response = server
        .get("/api/inquiries/2")
        .add_header(name, value)
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), b);
}

#[tokio::test]
async fn unknown_inquiry_is_not_found() {
    let server = server();
    submit(&server, "A").await;

    for path in ["/api/inquiries/9999", "/api/inquiries/0", "/api/inquiries/-3"] {
        let (name, value) = authorization(ADMIN_TOKEN);
        let response = server.get(path).add_header(name, value).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
    }

    let (name, value) = authorization(ADMIN_TOKEN);
    server
        .get("/api/inquiries/abc")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn serves_static_site_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Meridian HR</h1>").unwrap();

    let server = server_with(GatewayConfig {
        site_dir: Some(dir.path().to_path_buf()),
        ..GatewayConfig::default()
    });

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("Meridian HR"));

    server.get("/health").await.assert_status_ok();
    server
        .get("/missing.css")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
