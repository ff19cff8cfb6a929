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
        DynUserOrderService, DynScopedListService, EntityServiceTrait, ScopedListServiceTrait,
    },
    domain::{
        requests::UserOrderRequest,
        responses::{ApiResponse, UserOrderResponse},
    },
    errors::{ErrorResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/UserOrder/GetUserOrders",
    tag = "UserOrder",
    responses(
        (status = 200, description = "All user orders", body = ApiResponse<Vec<UserOrderResponse>>),
        (status = 404, description = "No user orders found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<Vec<UserOrderResponse>>)
    )
)]
pub async fn get_user_orders(
    Extension(service): Extension<DynUserOrderService>,
) -> impl IntoResponse {
    service.list().await
}

#[utoipa::path(
    get,
    path = "/api/UserOrder/GetUserOrder/{id}",
    tag = "UserOrder",
    params(("id" = i32, Path, description = "User order ID")),
    responses(
        (status = 200, description = "User order details", body = ApiResponse<UserOrderResponse>),
        (status = 404, description = "User order not found", body = ErrorResponse)
    )
)]
pub async fn get_user_order(
    Extension(service): Extension<DynUserOrderService>,
    SimplePath(id): SimplePath<i32>,
) -> impl IntoResponse {
    service.get(id).await
}

#[utoipa::path(
    put,
    path = "/api/UserOrder/PutUserOrder/{id}",
    tag = "UserOrder",
    params(("id" = i32, Path, description = "User order ID")),
    request_body = UserOrderRequest,
    responses(
        (status = 200, description = "User order updated", body = ApiResponse<UserOrderResponse>),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 404, description = "User order not found", body = ErrorResponse)
    )
)]
pub async fn update_user_order(
    Extension(service): Extension<DynUserOrderService>,
    SimplePath(id): SimplePath<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UserOrderRequest>,
) -> impl IntoResponse {
    service.update(id, body).await
}

#[utoipa::path(
    post,
    path = "/api/UserOrder/PostUserOrder",
    tag = "UserOrder",
    request_body = UserOrderRequest,
    responses(
        (status = 201, description = "User order created", body = ApiResponse<UserOrderResponse>),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<UserOrderResponse>)
    )
)]
pub async fn create_user_order(
    Extension(service): Extension<DynUserOrderService>,
    SimpleValidatedJson(body): SimpleValidatedJson<UserOrderRequest>,
) -> impl IntoResponse {
    service.create(body).await
}

#[utoipa::path(
    delete,
    path = "/api/UserOrder/DeleteUserOrder/{id}",
    tag = "UserOrder",
    params(("id" = i32, Path, description = "User order ID")),
    responses(
        (status = 200, description = "User order deleted", body = ApiResponse<UserOrderResponse>),
        (status = 404, description = "User order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<UserOrderResponse>)
    )
)]
pub async fn delete_user_order(
    Extension(service): Extension<DynUserOrderService>,
    SimplePath(id): SimplePath<i32>,
) -> impl IntoResponse {
    service.delete(id).await
}

#[utoipa::path(
    get,
    path = "/api/UserOrder/GetUserOrdersByUser/{userId}",
    tag = "UserOrder",
    params(("userId" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "All user orders of the user", body = ApiResponse<Vec<UserOrderResponse>>),
        (status = 404, description = "The user has no user orders", body = ErrorResponse)
    )
)]
pub async fn get_user_orders_by_user(
    Extension(service): Extension<DynScopedListService<UserOrderResponse>>,
    SimplePath(user_id): SimplePath<i32>,
) -> impl IntoResponse {
    service.list_by_parent(user_id).await
}

pub fn user_order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/UserOrder/GetUserOrders", get(get_user_orders))
        .route("/api/UserOrder/GetUserOrder/{id}", get(get_user_order))
        .route("/api/UserOrder/PutUserOrder/{id}", put(update_user_order))
        .route("/api/UserOrder/PostUserOrder", post(create_user_order))
        .route("/api/UserOrder/DeleteUserOrder/{id}", delete(delete_user_order))
        .route("/api/UserOrder/GetUserOrdersByUser/{userId}", get(get_user_orders_by_user))
        .layer(Extension(app_state.di_container.user_orders_by_user.clone()))
        .layer(Extension(app_state.di_container.user_order_service.clone()))
}
