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
    abstract_trait::{
        DynOrderLineService, DynScopedListService, EntityServiceTrait, ScopedListServiceTrait,
    },
    domain::{
        requests::OrderLineRequest,
        responses::{ApiResponse, OrderLineResponse},
    },
    errors::{ErrorResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/OrderLine/GetOrderLines",
    tag = "OrderLine",
    responses(
        (status = 200, description = "All order lines", body = ApiResponse<Vec<OrderLineResponse>>),
        (status = 404, description = "No order lines found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<Vec<OrderLineResponse>>)
    )
)]
pub async fn get_order_lines(
    Extension(service): Extension<DynOrderLineService>,
) -> impl IntoResponse {
    service.list().await
}

#[utoipa::path(
    get,
    path = "/api/OrderLine/GetOrderLine/{id}",
    tag = "OrderLine",
    params(("id" = i32, Path, description = "Order line ID")),
    responses(
        (status = 200, description = "Order line details", body = ApiResponse<OrderLineResponse>),
        (status = 404, description = "Order line not found", body = ErrorResponse)
    )
)]
pub async fn get_order_line(
    Extension(service): Extension<DynOrderLineService>,
    SimplePath(id): SimplePath<i32>,
) -> impl IntoResponse {
    service.get(id).await
}

#[utoipa::path(
    put,
    path = "/api/OrderLine/PutOrderLine/{id}",
    tag = "OrderLine",
    params(("id" = i32, Path, description = "Order line ID")),
    request_body = OrderLineRequest,
    responses(
        (status = 200, description = "Order line updated", body = ApiResponse<OrderLineResponse>),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 404, description = "Order line not found", body = ErrorResponse)
    )
)]
pub async fn update_order_line(
    Extension(service): Extension<DynOrderLineService>,
    SimplePath(id): SimplePath<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<OrderLineRequest>,
) -> impl IntoResponse {
    service.update(id, body).await
}

#[utoipa::path(
    post,
    path = "/api/OrderLine/PostOrderLine",
    tag = "OrderLine",
    request_body = OrderLineRequest,
    responses(
        (status = 201, description = "Order line created", body = ApiResponse<OrderLineResponse>),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<OrderLineResponse>)
    )
)]
pub async fn create_order_line(
    Extension(service): Extension<DynOrderLineService>,
    SimpleValidatedJson(body): SimpleValidatedJson<OrderLineRequest>,
) -> impl IntoResponse {
    service.create(body).await
}

#[utoipa::path(
    delete,
    path = "/api/OrderLine/DeleteOrderLine/{id}",
    tag = "OrderLine",
    params(("id" = i32, Path, description = "Order line ID")),
    responses(
        (status = 200, description = "Order line deleted", body = ApiResponse<OrderLineResponse>),
        (status = 404, description = "Order line not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<OrderLineResponse>)
    )
)]
pub async fn delete_order_line(
    Extension(service): Extension<DynOrderLineService>,
    SimplePath(id): SimplePath<i32>,
) -> impl IntoResponse {
    service.delete(id).await
}

#[utoipa::path(
    get,
    path = "/api/OrderLine/GetOrderLinesByOrder/{orderId}",
    tag = "OrderLine",
    params(("orderId" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "All order lines of the order", body = ApiResponse<Vec<OrderLineResponse>>),
        (status = 404, description = "The order has no order lines", body = ErrorResponse)
    )
)]
pub async fn get_order_lines_by_order(
    Extension(service): Extension<DynScopedListService<OrderLineResponse>>,
    SimplePath(order_id): SimplePath<i32>,
) -> impl IntoResponse {
    service.list_by_parent(order_id).await
}

pub fn order_line_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/OrderLine/GetOrderLines", get(get_order_lines))
        .route("/api/OrderLine/GetOrderLine/{id}", get(get_order_line))
        .route("/api/OrderLine/PutOrderLine/{id}", put(update_order_line))
        .route("/api/OrderLine/PostOrderLine", post(create_order_line))
        .route("/api/OrderLine/DeleteOrderLine/{id}", delete(delete_order_line))
        .route("/api/OrderLine/GetOrderLinesByOrder/{orderId}", get(get_order_lines_by_order))
        .layer(Extension(app_state.di_container.order_lines_by_order.clone()))
        .layer(Extension(app_state.di_container.order_line_service.clone()))
}
