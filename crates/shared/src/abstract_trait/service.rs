use crate::domain::{
    requests::{
        CategoryRequest, OrderLineRequest, OrderRequest, ProductRequest, UserOrderRequest,
        UserRequest,
    },
    responses::{
        ApiResponse, CategoryResponse, OrderLineResponse, OrderResponse, ProductResponse,
        UserOrderResponse, UserResponse,
    },
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynEntityService<R, P> = Arc<dyn EntityServiceTrait<R, P> + Send + Sync>;
pub type DynScopedListService<P> = Arc<dyn ScopedListServiceTrait<P> + Send + Sync>;

pub type DynUserService = DynEntityService<UserRequest, UserResponse>;
pub type DynCategoryService = DynEntityService<CategoryRequest, CategoryResponse>;
pub type DynProductService = DynEntityService<ProductRequest, ProductResponse>;
pub type DynOrderService = DynEntityService<OrderRequest, OrderResponse>;
pub type DynOrderLineService = DynEntityService<OrderLineRequest, OrderLineResponse>;
pub type DynUserOrderService = DynEntityService<UserOrderRequest, UserOrderResponse>;

/// CRUD contour shared by every entity. Failures are reported through the
/// envelope, never as an error.
#[async_trait]
pub trait EntityServiceTrait<R, P> {
    async fn list(&self) -> ApiResponse<Vec<P>>;
    async fn get(&self, id: i32) -> ApiResponse<P>;
    async fn create(&self, req: R) -> ApiResponse<P>;
    async fn update(&self, id: i32, req: R) -> ApiResponse<P>;
    async fn delete(&self, id: i32) -> ApiResponse<P>;
}

#[async_trait]
pub trait ScopedListServiceTrait<P> {
    async fn list_by_parent(&self, parent_id: i32) -> ApiResponse<Vec<P>>;
}
