use crate::{
    domain::requests::{
        CategoryRequest, OrderLineRequest, OrderRequest, ProductRequest, UserOrderRequest,
        UserRequest,
    },
    errors::RepositoryError,
    model::{
        Category as CategoryModel, Order as OrderModel, OrderLine as OrderLineModel,
        Product as ProductModel, Status as StatusModel, User as UserModel,
        UserOrder as UserOrderModel,
    },
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynEntityRepository<M, R> = Arc<dyn EntityRepositoryTrait<M, R> + Send + Sync>;
pub type DynScopedRepository<M> = Arc<dyn ScopedRepositoryTrait<M> + Send + Sync>;
pub type DynStatusRepository = Arc<dyn StatusRepositoryTrait + Send + Sync>;

pub type DynUserRepository = DynEntityRepository<UserModel, UserRequest>;
pub type DynCategoryRepository = DynEntityRepository<CategoryModel, CategoryRequest>;
pub type DynProductRepository = DynEntityRepository<ProductModel, ProductRequest>;
pub type DynOrderRepository = DynEntityRepository<OrderModel, OrderRequest>;
pub type DynOrderLineRepository = DynEntityRepository<OrderLineModel, OrderLineRequest>;
pub type DynUserOrderRepository = DynEntityRepository<UserOrderModel, UserOrderRequest>;

/// Typed record access for one table. `M` is the stored row (with resolved
/// references), `R` the request carrying its mutable fields.
///
/// `update` and `delete` return `None` when no row has the given id.
#[async_trait]
pub trait EntityRepositoryTrait<M, R> {
    async fn find_all(&self) -> Result<Vec<M>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<M>, RepositoryError>;
    async fn create(&self, req: &R) -> Result<M, RepositoryError>;
    async fn update(&self, id: i32, req: &R) -> Result<Option<M>, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<Option<M>, RepositoryError>;
}

/// Rows of a join table filtered by their owning record.
#[async_trait]
pub trait ScopedRepositoryTrait<M> {
    async fn find_by_parent(&self, parent_id: i32) -> Result<Vec<M>, RepositoryError>;
}

#[async_trait]
pub trait StatusRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<StatusModel>, RepositoryError>;
    /// Inserts the missing rows; existing ids are left untouched.
    async fn seed(&self, statuses: &[StatusModel]) -> Result<u64, RepositoryError>;
}
