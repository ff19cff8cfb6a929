use crate::{
    abstract_trait::{DynScopedRepository, ScopedListServiceTrait},
    domain::responses::ApiResponse,
    errors::ServiceError,
    service::recorder::OperationRecorder,
    utils::Method,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use std::{marker::PhantomData, sync::Arc};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy)]
pub struct ScopedLabels {
    pub plural: &'static str,
    pub parent: &'static str,
    pub metric: &'static str,
    pub component: &'static str,
}

impl ScopedLabels {
    pub const ORDER_LINES_BY_ORDER: Self = Self {
        plural: "order lines",
        parent: "order",
        metric: "order_lines_by_order_service",
        component: "OrderLinesByOrderService",
    };
    pub const USER_ORDERS_BY_USER: Self = Self {
        plural: "user orders",
        parent: "user",
        metric: "user_orders_by_user_service",
        component: "UserOrdersByUserService",
    };
}

/// Lists the join rows owned by one parent record.
pub struct ScopedListService<M, P> {
    repository: DynScopedRepository<M>,
    labels: ScopedLabels,
    recorder: OperationRecorder,
    _projection: PhantomData<fn() -> P>,
}

impl<M, P> ScopedListService<M, P> {
    pub async fn new(
        repository: DynScopedRepository<M>,
        labels: ScopedLabels,
        registry: Arc<Mutex<Registry>>,
        expose_internal_errors: bool,
    ) -> Self {
        let recorder = OperationRecorder::new(
            labels.metric,
            labels.component,
            registry,
            expose_internal_errors,
        )
        .await;

        Self {
            repository,
            labels,
            recorder,
            _projection: PhantomData,
        }
    }
}

#[async_trait]
impl<M, P> ScopedListServiceTrait<P> for ScopedListService<M, P>
where
    M: Send + Sync + 'static,
    P: From<M> + Send + Sync + 'static,
{
    async fn list_by_parent(&self, parent_id: i32) -> ApiResponse<Vec<P>> {
        let ctx = self.recorder.start(Method::Get, "list_by_parent");

        let outcome: Result<ApiResponse<Vec<P>>, ServiceError> = match self
            .repository
            .find_by_parent(parent_id)
            .await
        {
            Ok(rows) if rows.is_empty() => Err(ServiceError::NotFound(format!(
                "No {} found for {} {parent_id}",
                self.labels.plural, self.labels.parent
            ))),
            Ok(rows) => Ok(ApiResponse::ok(
                rows.into_iter().map(P::from).collect(),
                format!(
                    "All {} of {} {parent_id} retrieved",
                    self.labels.plural, self.labels.parent
                ),
            )),
            Err(err) => Err(ServiceError::from(err)),
        };

        self.recorder.finish(ctx, outcome).await
    }
}
