use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use burgermania_api::{handler::AppRouter, state::AppState};
use serde_json::{Value, json};
use shared::{config::Hashing, service::seed_order_statuses, testing::memory_repositories};
use std::sync::Arc;
use tower::ServiceExt;

async fn app() -> Router {
    let (_store, repositories) = memory_repositories();
    seed_order_statuses(&repositories.statuses).await.unwrap();

    let hashing = Arc::new(Hashing::with_cost(4));
    let state = AppState::from_repositories(repositories, hashing, false).await;
    AppRouter::build(state)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

fn burgers() -> Value {
    json!({
        "name": "Burgers",
        "description": "Beef burgers",
        "pathImage": "/img/b.png"
    })
}

fn classic_burger(category_id: i32) -> Value {
    json!({
        "name": "Classic Burger",
        "price": 9.99,
        "categoryId": category_id,
        "pathImage": "/img/p.png",
        "baseDescription": "Juicy beef patty"
    })
}

#[tokio::test]
async fn empty_list_is_a_404_error_body() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/api/Product/GetProducts", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": 404, "errors": "No products found" }));
}

#[tokio::test]
async fn category_and_product_scenario() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/Category/PostCategory",
        Some(burgers()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["statusCode"], 201);
    assert_eq!(body["data"]["id"], 1);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/Product/PostProduct",
        Some(classic_burger(1)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["categoryName"], "Burgers");
    let product_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/Product/PutProduct/{product_id}"),
        Some(classic_burger(999)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid category");
    assert_eq!(body["data"], Value::Null);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/Product/GetProduct/{product_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["categoryId"], 1);
}

#[tokio::test]
async fn order_scenario_cascades_to_order_lines() {
    let app = app().await;
    send(&app, Method::POST, "/api/Category/PostCategory", Some(burgers())).await;
    send(&app, Method::POST, "/api/Product/PostProduct", Some(classic_burger(1))).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/Order/PostOrder",
        Some(json!({ "statusId": 1, "value": 15.50 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "InProgress");
    let order_id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/OrderLine/PostOrderLine",
        Some(json!({ "orderId": order_id, "productId": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let lines_uri = format!("/api/OrderLine/GetOrderLinesByOrder/{order_id}");
    let (status, body) = send(&app, Method::GET, &lines_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/Order/DeleteOrder/{order_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, &lines_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn invalid_bodies_are_rejected_with_field_messages() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/Product/PostProduct",
        Some(json!({
            "name": "Classic Burger",
            "price": 0,
            "categoryId": 1,
            "pathImage": "/img/p.png"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(
        body["errors"]["price"][0],
        "Price must be between 0.01 and 999.99"
    );
}

#[tokio::test]
async fn malformed_json_is_reported_under_body() {
    let app = app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/Category/PostCategory")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], 400);
    assert!(body["errors"]["body"].is_array());
}

#[tokio::test]
async fn non_numeric_ids_are_reported_under_path() {
    let app = app().await;

    for (method, uri) in [
        (Method::GET, "/api/Product/GetProduct/abc"),
        (Method::DELETE, "/api/Order/DeleteOrder/1x"),
        (Method::GET, "/api/OrderLine/GetOrderLinesByOrder/first"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["status"], 400);
        assert!(body["errors"]["path"].is_array(), "{uri}");
    }
}

#[tokio::test]
async fn users_never_expose_their_password() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/User/PostUser",
        Some(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "password": "secret1"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"].get("password").is_none());
    assert_eq!(body["data"]["email"], "jane@example.com");
}

#[tokio::test]
async fn deleting_a_referenced_category_is_a_redacted_500() {
    let app = app().await;
    send(&app, Method::POST, "/api/Category/PostCategory", Some(burgers())).await;
    send(&app, Method::POST, "/api/Product/PostProduct", Some(classic_burger(1))).await;

    let (status, body) = send(&app, Method::DELETE, "/api/Category/DeleteCategory/1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "An unexpected error occurred");

    let (status, _) = send(&app, Method::GET, "/api/Category/GetCategory/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn metrics_and_openapi_are_served() {
    let app = app().await;
    send(&app, Method::GET, "/api/User/GetUsers", None).await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("user_service_request_counter_total"));

    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/Product/GetProducts"].is_object());
    assert!(doc["paths"]["/api/OrderLine/GetOrderLinesByOrder/{orderId}"].is_object());
}
