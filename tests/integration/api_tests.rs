//! API integration tests against a server on an ephemeral port

use reqwest::Client;
use serde_json::{json, Value};

use bookshelf_server::{
    api,
    repository::{books::BookStore, seed, Repository},
    AppState,
};

/// Start a seeded server and return its API base URL
async fn spawn_server() -> String {
    let store = BookStore::with_books(seed::default_books());
    let app = api::create_router(AppState::new(Repository::new(store)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{}/api/v1", addr)
}

async fn list(client: &Client, base: &str, query: &str) -> Value {
    client
        .get(format!("{}/books?{}", base, query))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response")
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_seeded_catalog_pages() {
    let base = spawn_server().await;
    let client = Client::new();

    let body = list(&client, &base, "page=1&size=10").await;
    assert_eq!(body["total"], 15);
    assert_eq!(body["bookList"].as_array().unwrap().len(), 10);
    assert_eq!(body["bookList"][0]["id"], "1");

    let body = list(&client, &base, "page=2&size=10").await;
    assert_eq!(body["bookList"].as_array().unwrap().len(), 5);
    assert_eq!(body["bookList"][4]["id"], "15");

    let body = list(&client, &base, "page=3&size=10").await;
    assert_eq!(body["total"], 15);
    assert!(body["bookList"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_filter_by_title() {
    let base = spawn_server().await;
    let client = Client::new();

    let body = list(&client, &base, "page=1&size=10&title=Jurassic%20Park").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["bookList"][0]["author"], "Michael Crichton");

    let body = list(&client, &base, "page=1&size=10&title=Jurassic").await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_book_lifecycle() {
    let base = spawn_server().await;
    let client = Client::new();

    // Add
    let response: Value = client
        .post(format!("{}/books", base))
        .json(&json!({ "post": { "title": "The Hobbit", "author": "J.R.R. Tolkien" } }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(response["code"], "1");

    let body = list(&client, &base, "page=1&size=1").await;
    assert_eq!(body["total"], 16);
    let id = body["bookList"][0]["id"].as_str().unwrap().to_string();
    assert_eq!(body["bookList"][0]["title"], "The Hobbit");

    // Get
    let book: Value = client
        .get(format!("{}/books/{}", base, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(book["author"], "J.R.R. Tolkien");

    // Edit onto an existing pair is rejected
    let response: Value = client
        .put(format!("{}/books/{}", base, id))
        .json(&json!({ "title": "Jurassic Park", "author": "Michael Crichton" }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(response["code"], "-1");
    assert!(!response["message"].as_str().unwrap().is_empty());

    // Delete
    let response: Value = client
        .delete(format!("{}/books/{}", base, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(response["code"], "1");

    let response = client
        .get(format!("{}/books/{}", base, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_delete_unknown_id_reports_success() {
    let base = spawn_server().await;
    let client = Client::new();

    let response: Value = client
        .delete(format!("{}/books/does-not-exist", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(response["code"], "1");

    let body = list(&client, &base, "page=1&size=1").await;
    assert_eq!(body["total"], 15);
}
