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
    abstract_trait::{DynCategoryService, EntityServiceTrait},
    domain::{
        requests::CategoryRequest,
        responses::{ApiResponse, CategoryResponse},
    },
    errors::{ErrorResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/Category/GetCategories",
    tag = "Category",
    responses(
        (status = 200, description = "All categories", body = ApiResponse<Vec<CategoryResponse>>),
        (status = 404, description = "No categories found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<Vec<CategoryResponse>>)
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryService>,
) -> impl IntoResponse {
    service.list().await
}

#[utoipa::path(
    get,
    path = "/api/Category/GetCategory/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn get_category(
    Extension(service): Extension<DynCategoryService>,
    SimplePath(id): SimplePath<i32>,
) -> impl IntoResponse {
    service.get(id).await
}

#[utoipa::path(
    put,
    path = "/api/Category/PutCategory/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryService>,
    SimplePath(id): SimplePath<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CategoryRequest>,
) -> impl IntoResponse {
    service.update(id, body).await
}

#[utoipa::path(
    post,
    path = "/api/Category/PostCategory",
    tag = "Category",
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<CategoryResponse>)
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CategoryRequest>,
) -> impl IntoResponse {
    service.create(body).await
}

#[utoipa::path(
    delete,
    path = "/api/Category/DeleteCategory/{id}",
    tag = "Category",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Category still referenced", body = ApiResponse<CategoryResponse>)
    )
)]
pub async fn delete_category(
    Extension(service): Extension<DynCategoryService>,
    SimplePath(id): SimplePath<i32>,
) -> impl IntoResponse {
    service.delete(id).await
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/Category/GetCategories", get(get_categories))
        .route("/api/Category/GetCategory/{id}", get(get_category))
        .route("/api/Category/PutCategory/{id}", put(update_category))
        .route("/api/Category/PostCategory", post(create_category))
        .route("/api/Category/DeleteCategory/{id}", delete(delete_category))
        .layer(Extension(app_state.di_container.category_service.clone()))
}
