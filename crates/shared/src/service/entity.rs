use crate::{
    abstract_trait::{DynEntityRepository, DynRequestGuard, EntityServiceTrait},
    domain::responses::ApiResponse,
    errors::ServiceError,
    service::recorder::OperationRecorder,
    utils::Method,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::{fmt, marker::PhantomData, sync::Arc};
use tokio::sync::Mutex;

/// Names an entity in messages and metrics.
#[derive(Debug, Clone, Copy)]
pub struct EntityLabels {
    /// Capitalized singular, e.g. `Order line`.
    pub name: &'static str,
    /// Lowercase plural, e.g. `order lines`.
    pub plural: &'static str,
    pub metric: &'static str,
    pub component: &'static str,
}

impl EntityLabels {
    pub const USER: Self = Self {
        name: "User",
        plural: "users",
        metric: "user_service",
        component: "UserService",
    };
    pub const CATEGORY: Self = Self {
        name: "Category",
        plural: "categories",
        metric: "category_service",
        component: "CategoryService",
    };
    pub const PRODUCT: Self = Self {
        name: "Product",
        plural: "products",
        metric: "product_service",
        component: "ProductService",
    };
    pub const ORDER: Self = Self {
        name: "Order",
        plural: "orders",
        metric: "order_service",
        component: "OrderService",
    };
    pub const ORDER_LINE: Self = Self {
        name: "Order line",
        plural: "order lines",
        metric: "order_line_service",
        component: "OrderLineService",
    };
    pub const USER_ORDER: Self = Self {
        name: "User order",
        plural: "user orders",
        metric: "user_order_service",
        component: "UserOrderService",
    };

    fn not_found(&self) -> ServiceError {
        ServiceError::NotFound(format!("{} not found", self.name))
    }
}

pub struct EntityServiceDeps<M, R> {
    pub repository: DynEntityRepository<M, R>,
    pub guard: DynRequestGuard<R>,
    pub labels: EntityLabels,
    pub registry: Arc<Mutex<Registry>>,
    pub expose_internal_errors: bool,
}

/// CRUD over one table. `M` is the stored row, `R` the request and `P` the
/// projection handed back to callers.
///
/// Every write first runs the request guard, so a rejected request leaves the
/// table untouched.
pub struct EntityService<M, R, P> {
    repository: DynEntityRepository<M, R>,
    guard: DynRequestGuard<R>,
    labels: EntityLabels,
    recorder: OperationRecorder,
    _projection: PhantomData<fn() -> P>,
}

impl<M, R, P> fmt::Debug for EntityService<M, R, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityService")
            .field("entity", &self.labels.name)
            .field("repository", &"Arc<dyn EntityRepositoryTrait>")
            .field("guard", &"Arc<dyn RequestGuardTrait>")
            .finish()
    }
}

impl<M, R, P> EntityService<M, R, P> {
    pub async fn new(deps: EntityServiceDeps<M, R>) -> Self {
        let EntityServiceDeps {
            repository,
            guard,
            labels,
            registry,
            expose_internal_errors,
        } = deps;

        let recorder = OperationRecorder::new(
            labels.metric,
            labels.component,
            registry,
            expose_internal_errors,
        )
        .await;

        Self {
            repository,
            guard,
            labels,
            recorder,
            _projection: PhantomData,
        }
    }
}

impl<M, R, P> EntityService<M, R, P>
where
    M: Send + Sync + 'static,
    R: Send + Sync + 'static,
    P: From<M> + Send + Sync + 'static,
{
    async fn try_list(&self) -> Result<ApiResponse<Vec<P>>, ServiceError> {
        let rows = self.repository.find_all().await?;

        if rows.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "No {} found",
                self.labels.plural
            )));
        }

        let data: Vec<P> = rows.into_iter().map(P::from).collect();
        Ok(ApiResponse::ok(
            data,
            format!("All {} retrieved", self.labels.plural),
        ))
    }

    async fn try_get(&self, id: i32) -> Result<ApiResponse<P>, ServiceError> {
        let row = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| self.labels.not_found())?;

        Ok(ApiResponse::ok(
            P::from(row),
            format!("{} retrieved", self.labels.name),
        ))
    }

    async fn try_create(&self, req: R) -> Result<ApiResponse<P>, ServiceError> {
        let req = self.guard.prepare(req).await?;
        let row = self.repository.create(&req).await?;

        Ok(ApiResponse::created(
            P::from(row),
            format!("{} created", self.labels.name),
        ))
    }

    async fn try_update(&self, id: i32, req: R) -> Result<ApiResponse<P>, ServiceError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(self.labels.not_found());
        }

        let req = self.guard.prepare(req).await?;

        // the row may have been deleted between the lookup and the write
        let row = self
            .repository
            .update(id, &req)
            .await?
            .ok_or_else(|| self.labels.not_found())?;

        Ok(ApiResponse::ok(
            P::from(row),
            format!("{} updated", self.labels.name),
        ))
    }

    async fn try_delete(&self, id: i32) -> Result<ApiResponse<P>, ServiceError> {
        let row = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| self.labels.not_found())?;

        Ok(ApiResponse::ok(
            P::from(row),
            format!("{} deleted", self.labels.name),
        ))
    }
}

#[async_trait]
impl<M, R, P> EntityServiceTrait<R, P> for EntityService<M, R, P>
where
    M: Send + Sync + 'static,
    R: Send + Sync + 'static,
    P: From<M> + Send + Sync + 'static,
{
    async fn list(&self) -> ApiResponse<Vec<P>> {
        let ctx = self.recorder.start(Method::Get, "list");
        let outcome = self.try_list().await;
        self.recorder.finish(ctx, outcome).await
    }

    async fn get(&self, id: i32) -> ApiResponse<P> {
        let ctx = self.recorder.start(Method::Get, "get");
        let outcome = self.try_get(id).await;
        self.recorder.finish(ctx, outcome).await
    }

    async fn create(&self, req: R) -> ApiResponse<P> {
        let ctx = self.recorder.start(Method::Post, "create");
        let outcome = self.try_create(req).await;
        self.recorder.finish(ctx, outcome).await
    }

    async fn update(&self, id: i32, req: R) -> ApiResponse<P> {
        let ctx = self.recorder.start(Method::Put, "update");
        let outcome = self.try_update(id, req).await;
        self.recorder.finish(ctx, outcome).await
    }

    async fn delete(&self, id: i32) -> ApiResponse<P> {
        let ctx = self.recorder.start(Method::Delete, "delete");
        let outcome = self.try_delete(id).await;
        self.recorder.finish(ctx, outcome).await
    }
}
