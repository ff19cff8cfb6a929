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
    abstract_trait::{DynUserService, EntityServiceTrait},
    domain::{
        requests::UserRequest,
        responses::{ApiResponse, UserResponse},
    },
    errors::{ErrorResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/User/GetUsers",
    tag = "User",
    responses(
        (status = 200, description = "All users", body = ApiResponse<Vec<UserResponse>>),
        (status = 404, description = "No users found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<Vec<UserResponse>>)
    )
)]
pub async fn get_users(Extension(service): Extension<DynUserService>) -> impl IntoResponse {
    service.list().await
}

#[utoipa::path(
    get,
    path = "/api/User/GetUser/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserService>,
    SimplePath(id): SimplePath<i32>,
) -> impl IntoResponse {
    service.get(id).await
}

#[utoipa::path(
    put,
    path = "/api/User/PutUser/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserResponse>),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn update_user(
    Extension(service): Extension<DynUserService>,
    SimplePath(id): SimplePath<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UserRequest>,
) -> impl IntoResponse {
    service.update(id, body).await
}

#[utoipa::path(
    post,
    path = "/api/User/PostUser",
    tag = "User",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserResponse>),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<UserResponse>)
    )
)]
pub async fn create_user(
    Extension(service): Extension<DynUserService>,
    SimpleValidatedJson(body): SimpleValidatedJson<UserRequest>,
) -> impl IntoResponse {
    service.create(body).await
}

#[utoipa::path(
    delete,
    path = "/api/User/DeleteUser/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "User still referenced", body = ApiResponse<UserResponse>)
    )
)]
pub async fn delete_user(
    Extension(service): Extension<DynUserService>,
    SimplePath(id): SimplePath<i32>,
) -> impl IntoResponse {
    service.delete(id).await
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/User/GetUsers", get(get_users))
        .route("/api/User/GetUser/{id}", get(get_user))
        .route("/api/User/PutUser/{id}", put(update_user))
        .route("/api/User/PostUser", post(create_user))
        .route("/api/User/DeleteUser/{id}", delete(delete_user))
        .layer(Extension(app_state.di_container.user_service.clone()))
}
