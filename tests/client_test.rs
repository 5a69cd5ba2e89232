//! CLI HTTP client against a mock server.

use mockito::{Matcher, Server};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;

use todo_tracker::cli::client::{ClientError, TodoClient};

fn item_body(total: &str, completed: bool) -> String {
    json!({
        "id": 1,
        "title": "Buy milk",
        "description": "desc",
        "category": "Work",
        "total_progress": total,
        "is_completed": completed,
        "last_progression_date": null,
        "progressions": []
    })
    .to_string()
}

#[tokio::test]
async fn test_create_item_sends_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/items")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "title": "Buy milk",
            "description": "desc",
            "category": "Work"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(item_body("0", false))
        .create_async()
        .await;

    let client = TodoClient::new(server.url()).expect("Failed to create client");
    let item = client
        .create_item("Buy milk", "desc", "Work")
        .await
        .expect("create failed");

    assert_eq!(item.id, 1);
    assert_eq!(item.total_progress, Decimal::ZERO);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_register_progression_posts_to_item() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/items/1/progressions")
        .match_body(Matcher::PartialJson(json!({ "date": "2024-01-01" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(item_body("100", true))
        .create_async()
        .await;

    let client = TodoClient::new(server.url()).unwrap();
    let item = client
        .register_progression(1, "2024-01-01", Decimal::ONE_HUNDRED)
        .await
        .unwrap();

    assert!(item.is_completed);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_error_carries_code() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("PUT", "/api/v1/items/1")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"Item 1 cannot be modified","code":"CANNOT_MODIFY"}"#)
        .create_async()
        .await;

    let client = TodoClient::new(server.url()).unwrap();
    let err = client.update_item(1, "late edit").await.unwrap_err();

    match &err {
        ClientError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(*status, StatusCode::BAD_REQUEST);
            assert_eq!(code, "CANNOT_MODIFY");
            assert!(message.contains("cannot be modified"));
        }
        ClientError::Http(e) => panic!("unexpected transport error: {e}"),
    }
    assert_eq!(err.code(), Some("CANNOT_MODIFY"));
}

#[tokio::test]
async fn test_non_json_error_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/items/3")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let client = TodoClient::new(server.url()).unwrap();
    let err = client.get_item(3).await.unwrap_err();

    assert_eq!(err.code(), Some("HTTP_ERROR"));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/categories")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"categories":["Work"]}"#)
        .create_async()
        .await;

    let client = TodoClient::new(format!("{}/", server.url())).unwrap();
    let categories = client.categories().await.unwrap();

    assert_eq!(categories.categories, vec!["Work"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let client = TodoClient::new("http://127.0.0.1:1").unwrap();
    let err = client.list_items().await.unwrap_err();

    assert!(matches!(err, ClientError::Http(_)));
    assert_eq!(err.code(), None);
}
