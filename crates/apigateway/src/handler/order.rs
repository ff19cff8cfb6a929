use crate::{
    middleware::{path::SimplePath, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    extract::Extension,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::{DynOrderService, EntityServiceTrait},
    domain::{
        requests::OrderRequest,
        responses::{ApiResponse, OrderResponse},
    },
    errors::{ErrorResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/Order/GetOrders",
    tag = "Order",
    responses(
        (status = 200, description = "All orders", body = ApiResponse<Vec<OrderResponse>>),
        (status = 404, description = "No orders found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<Vec<OrderResponse>>)
    )
)]
pub async fn get_orders(Extension(service): Extension<DynOrderService>) -> impl IntoResponse {
    service.list().await
}

#[utoipa::path(
    get,
    path = "/api/Order/GetOrder/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderService>,
    SimplePath(id): SimplePath<i32>,
) -> impl IntoResponse {
    service.get(id).await
}

#[utoipa::path(
    put,
    path = "/api/Order/PutOrder/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderService>,
    SimplePath(id): SimplePath<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<OrderRequest>,
) -> impl IntoResponse {
    service.update(id, body).await
}

#[utoipa::path(
    post,
    path = "/api/Order/PostOrder",
    tag = "Order",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<OrderResponse>)
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderService>,
    SimpleValidatedJson(body): SimpleValidatedJson<OrderRequest>,
) -> impl IntoResponse {
    service.create(body).await
}

#[utoipa::path(
    delete,
    path = "/api/Order/DeleteOrder/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<OrderResponse>)
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderService>,
    SimplePath(id): SimplePath<i32>,
) -> impl IntoResponse {
    service.delete(id).await
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/Order/GetOrders", get(get_orders))
        .route("/api/Order/GetOrder/{id}", get(get_order))
        .route("/api/Order/PutOrder/{id}", put(update_order))
        .route("/api/Order/PostOrder", post(create_order))
        .route("/api/Order/DeleteOrder/{id}", delete(delete_order))
        .layer(Extension(app_state.di_container.order_service.clone()))
}
