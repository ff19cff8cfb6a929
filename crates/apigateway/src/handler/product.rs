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
    abstract_trait::{DynProductService, EntityServiceTrait},
    domain::{
        requests::ProductRequest,
        responses::{ApiResponse, ProductResponse},
    },
    errors::{ErrorResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/Product/GetProducts",
    tag = "Product",
    responses(
        (status = 200, description = "All products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 404, description = "No products found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<Vec<ProductResponse>>)
    )
)]
pub async fn get_products(Extension(service): Extension<DynProductService>) -> impl IntoResponse {
    service.list().await
}

#[utoipa::path(
    get,
    path = "/api/Product/GetProduct/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductService>,
    SimplePath(id): SimplePath<i32>,
) -> impl IntoResponse {
    service.get(id).await
}

#[utoipa::path(
    put,
    path = "/api/Product/PutProduct/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductService>,
    SimplePath(id): SimplePath<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<ProductRequest>,
) -> impl IntoResponse {
    service.update(id, body).await
}

#[utoipa::path(
    post,
    path = "/api/Product/PostProduct",
    tag = "Product",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ApiResponse<ProductResponse>)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductService>,
    SimpleValidatedJson(body): SimpleValidatedJson<ProductRequest>,
) -> impl IntoResponse {
    service.create(body).await
}

#[utoipa::path(
    delete,
    path = "/api/Product/DeleteProduct/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Product still referenced", body = ApiResponse<ProductResponse>)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductService>,
    SimplePath(id): SimplePath<i32>,
) -> impl IntoResponse {
    service.delete(id).await
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/Product/GetProducts", get(get_products))
        .route("/api/Product/GetProduct/{id}", get(get_product))
        .route("/api/Product/PutProduct/{id}", put(update_product))
        .route("/api/Product/PostProduct", post(create_product))
        .route("/api/Product/DeleteProduct/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_service.clone()))
}
