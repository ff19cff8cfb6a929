use crate::{
    config::Hashing,
    di::{DependenciesInject, DependenciesInjectDeps},
    domain::requests::{
        CategoryRequest, OrderLineRequest, OrderRequest, ProductRequest, UserOrderRequest,
        UserRequest,
    },
    service::{INVALID_CATEGORY, INVALID_STATUS, UNEXPECTED_ERROR_MESSAGE, seed_order_statuses},
    testing::{MemoryStore, memory_repositories},
};
use prometheus_client::registry::Registry;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

async fn container() -> (Arc<MemoryStore>, DependenciesInject) {
    let (store, repositories) = memory_repositories();
    seed_order_statuses(&repositories.statuses).await.unwrap();

    let deps = DependenciesInjectDeps {
        repositories,
        hash: Arc::new(Hashing::with_cost(4)),
        registry: Arc::new(Mutex::new(Registry::default())),
        expose_internal_errors: false,
    };

    (store, DependenciesInject::new(deps).await)
}

fn burgers() -> CategoryRequest {
    CategoryRequest {
        name: "Burgers".into(),
        description: "Beef burgers".into(),
        path_image: "/img/b.png".into(),
    }
}

fn classic_burger(category_id: i32) -> ProductRequest {
    ProductRequest {
        name: "Classic Burger".into(),
        price: Decimal::new(999, 2),
        category_id,
        path_image: "/img/p.png".into(),
        base_description: Some("Juicy beef".into()),
        full_description: None,
    }
}

fn order(status_id: i32) -> OrderRequest {
    OrderRequest {
        status_id,
        value: Decimal::new(1550, 2),
    }
}

fn jane() -> UserRequest {
    UserRequest {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        password: "secret1".into(),
    }
}

#[tokio::test]
async fn seeding_statuses_is_idempotent() {
    let (_, repositories) = memory_repositories();

    assert_eq!(seed_order_statuses(&repositories.statuses).await.unwrap(), 3);
    assert_eq!(seed_order_statuses(&repositories.statuses).await.unwrap(), 0);

    let mut names = Vec::new();
    for id in 1..=3 {
        let status = repositories.statuses.find_by_id(id).await.unwrap().unwrap();
        names.push(status.name);
    }
    assert_eq!(names, ["InProgress", "Completed", "Cancelled"]);
    assert!(repositories.statuses.find_by_id(4).await.unwrap().is_none());
}

#[tokio::test]
async fn empty_tables_list_as_not_found() {
    let (_, di) = container().await;

    let products = di.product_service.list().await;
    assert!(!products.success);
    assert_eq!(products.status_code, 404);
    assert_eq!(products.message, "No products found");
    assert!(products.data.is_none());

    let lines = di.order_line_service.list().await;
    assert_eq!(lines.status_code, 404);
    assert_eq!(lines.message, "No order lines found");
}

#[tokio::test]
async fn created_entities_round_trip_through_get() {
    let (_, di) = container().await;

    let category = di.category_service.create(burgers()).await;
    assert_eq!(category.status_code, 201);
    let category = category.data.unwrap();
    assert_eq!(
        di.category_service.get(category.id).await.data,
        Some(category.clone())
    );

    let product = di
        .product_service
        .create(classic_burger(category.id))
        .await
        .data
        .unwrap();
    assert_eq!(di.product_service.get(product.id).await.data, Some(product.clone()));

    let user = di.user_service.create(jane()).await.data.unwrap();
    assert_eq!(di.user_service.get(user.id).await.data, Some(user.clone()));

    let created_order = di.order_service.create(order(1)).await.data.unwrap();
    assert_eq!(
        di.order_service.get(created_order.id).await.data,
        Some(created_order.clone())
    );

    let line = di
        .order_line_service
        .create(OrderLineRequest {
            order_id: created_order.id,
            product_id: product.id,
        })
        .await
        .data
        .unwrap();
    assert_eq!(di.order_line_service.get(line.id).await.data, Some(line));

    let link = di
        .user_order_service
        .create(UserOrderRequest {
            user_id: user.id,
            order_id: created_order.id,
        })
        .await
        .data
        .unwrap();
    assert_eq!(di.user_order_service.get(link.id).await.data, Some(link));
}

#[tokio::test]
async fn deleted_entities_are_no_longer_found() {
    let (_, di) = container().await;
    let category = di.category_service.create(burgers()).await.data.unwrap();

    let deleted = di.category_service.delete(category.id).await;
    assert_eq!(deleted.status_code, 200);
    assert_eq!(deleted.message, "Category deleted");
    assert_eq!(deleted.data, Some(category.clone()));

    let missing = di.category_service.get(category.id).await;
    assert_eq!(missing.status_code, 404);
    assert_eq!(missing.message, "Category not found");

    assert_eq!(di.category_service.delete(category.id).await.status_code, 404);
}

#[tokio::test]
async fn product_follows_the_category_scenario() {
    let (_, di) = container().await;

    let category = di.category_service.create(burgers()).await.data.unwrap();
    assert_eq!(category.id, 1);

    let created = di.product_service.create(classic_burger(1)).await;
    assert!(created.success);
    assert_eq!(created.status_code, 201);
    let product = created.data.unwrap();
    assert_eq!(product.category_name, "Burgers");

    let rejected = di
        .product_service
        .update(product.id, classic_burger(999))
        .await;
    assert!(!rejected.success);
    assert_eq!(rejected.status_code, 400);
    assert_eq!(rejected.message, INVALID_CATEGORY);

    let stored = di.product_service.get(product.id).await.data.unwrap();
    assert_eq!(stored.category_id, Some(1));
}

#[tokio::test]
async fn product_with_unknown_category_is_never_written() {
    let (store, di) = container().await;

    let response = di.product_service.create(classic_burger(42)).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(response.message, INVALID_CATEGORY);
    assert_eq!(store.product_count().await, 0);
}

#[tokio::test]
async fn updating_a_missing_row_is_not_found() {
    let (_, di) = container().await;

    let response = di.category_service.update(7, burgers()).await;

    assert_eq!(response.status_code, 404);
    assert_eq!(response.message, "Category not found");
}

#[tokio::test]
async fn referenced_category_cannot_be_deleted() {
    let (store, di) = container().await;
    let category = di.category_service.create(burgers()).await.data.unwrap();
    di.product_service
        .create(classic_burger(category.id))
        .await
        .data
        .unwrap();

    let response = di.category_service.delete(category.id).await;

    assert!(!response.success);
    assert_eq!(response.status_code, 500);
    assert_eq!(response.message, UNEXPECTED_ERROR_MESSAGE);
    assert!(di.category_service.get(category.id).await.success);
    assert_eq!(store.product_count().await, 1);
}

#[tokio::test]
async fn duplicate_product_name_is_unexpected() {
    let (_, di) = container().await;
    let category = di.category_service.create(burgers()).await.data.unwrap();
    di.product_service.create(classic_burger(category.id)).await;

    let duplicate = di.product_service.create(classic_burger(category.id)).await;

    assert_eq!(duplicate.status_code, 500);
}

#[tokio::test]
async fn order_with_unknown_status_is_rejected() {
    let (_, di) = container().await;

    let response = di.order_service.create(order(9)).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(response.message, INVALID_STATUS);
}

#[tokio::test]
async fn order_projection_resolves_status_name() {
    let (_, di) = container().await;

    let created = di.order_service.create(order(2)).await.data.unwrap();

    assert_eq!(created.status, "Completed");
    assert_eq!(created.value, Decimal::new(1550, 2));
}

#[tokio::test]
async fn deleting_an_order_cascades_to_its_links() {
    let (store, di) = container().await;
    let category = di.category_service.create(burgers()).await.data.unwrap();
    let product = di
        .product_service
        .create(classic_burger(category.id))
        .await
        .data
        .unwrap();
    let user = di.user_service.create(jane()).await.data.unwrap();

    let placed = di.order_service.create(order(1)).await;
    assert_eq!(placed.status_code, 201);
    let placed = placed.data.unwrap();

    let line = di
        .order_line_service
        .create(OrderLineRequest {
            order_id: placed.id,
            product_id: product.id,
        })
        .await;
    assert_eq!(line.status_code, 201);
    di.user_order_service
        .create(UserOrderRequest {
            user_id: user.id,
            order_id: placed.id,
        })
        .await;

    assert_eq!(
        di.order_lines_by_order
            .list_by_parent(placed.id)
            .await
            .data
            .map(|lines| lines.len()),
        Some(1)
    );

    let deleted = di.order_service.delete(placed.id).await;
    assert_eq!(deleted.status_code, 200);

    let lines = di.order_lines_by_order.list_by_parent(placed.id).await;
    assert_eq!(lines.status_code, 404);
    assert_eq!(
        lines.message,
        format!("No order lines found for order {}", placed.id)
    );
    assert_eq!(store.order_line_count().await, 0);
    assert_eq!(store.user_order_count().await, 0);

    // the user itself is untouched and now deletable
    assert_eq!(di.user_service.delete(user.id).await.status_code, 200);
}

#[tokio::test]
async fn user_with_orders_cannot_be_deleted() {
    let (_, di) = container().await;
    let user = di.user_service.create(jane()).await.data.unwrap();
    let placed = di.order_service.create(order(1)).await.data.unwrap();
    di.user_order_service
        .create(UserOrderRequest {
            user_id: user.id,
            order_id: placed.id,
        })
        .await;

    assert_eq!(di.user_service.delete(user.id).await.status_code, 500);

    let by_user = di.user_orders_by_user.list_by_parent(user.id).await;
    assert_eq!(by_user.status_code, 200);
    assert_eq!(by_user.data.unwrap()[0].order_id, placed.id);
}

#[tokio::test]
async fn passwords_are_hashed_and_never_projected() {
    let (store, di) = container().await;

    let created = di.user_service.create(jane()).await;
    let user = created.data.unwrap();

    let stored = store.stored_password(user.id).await.unwrap();
    assert_ne!(stored, "secret1");
    assert!(bcrypt::verify("secret1", &stored).unwrap());

    let body = serde_json::to_value(di.user_service.list().await).unwrap();
    assert!(body["data"][0].get("password").is_none());

    let mut changed = jane();
    changed.password = "another1".into();
    di.user_service.update(user.id, changed).await;
    let stored = store.stored_password(user.id).await.unwrap();
    assert!(bcrypt::verify("another1", &stored).unwrap());
}

#[tokio::test]
async fn order_line_with_missing_product_is_unexpected() {
    let (_, di) = container().await;
    let placed = di.order_service.create(order(1)).await.data.unwrap();

    let response = di
        .order_line_service
        .create(OrderLineRequest {
            order_id: placed.id,
            product_id: 404,
        })
        .await;

    assert_eq!(response.status_code, 500);
    assert_eq!(response.message, UNEXPECTED_ERROR_MESSAGE);
}
