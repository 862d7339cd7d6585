mod common;

use common::TestApp;
use mongodb::bson::oid::ObjectId;
use reqwest::Client;
use serde_json::json;

async fn create_article(app: &TestApp, client: &Client) -> String {
    let response = client
        .post(format!("{}/api/articles", app.address))
        .json(&json!({ "title": "Hello", "author": "Ann", "content": "World" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    body["article"]["_id"]
        .as_str()
        .expect("Missing article id")
        .to_string()
}

async fn list_len(app: &TestApp, client: &Client) -> usize {
    let response = client
        .get(format!("{}/api/articles", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    body.as_array().expect("Expected a JSON array").len()
}

#[tokio::test]
async fn delete_removes_article() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    let id = create_article(&app, &client).await;

    let response = client
        .delete(format!("{}/api/articles/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "message": "Article deleted successfully" }));

    assert_eq!(list_len(&app, &client).await, 0);

    app.cleanup().await;
}

#[tokio::test]
async fn delete_of_unknown_id_is_idempotent() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    create_article(&app, &client).await;

    let unknown_id = ObjectId::new().to_hex();
    let response = client
        .delete(format!("{}/api/articles/{}", app.address, unknown_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "message": "Article deleted successfully" }));

    // The one existing article is untouched
    assert_eq!(list_len(&app, &client).await, 1);

    app.cleanup().await;
}

#[tokio::test]
async fn delete_with_malformed_id_returns_400() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/api/articles/not-a-valid-id", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(400, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "error": "Invalid ID" }));

    app.cleanup().await;
}
