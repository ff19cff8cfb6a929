use crate::{
    abstract_trait::{
        DynCategoryService, DynHashing, DynOrderLineService, DynOrderService, DynProductService,
        DynScopedListService, DynUserOrderService, DynUserService,
    },
    domain::{
        requests::{
            CategoryRequest, OrderLineRequest, OrderRequest, ProductRequest, UserOrderRequest,
            UserRequest,
        },
        responses::{
            CategoryResponse, OrderLineResponse, OrderResponse, ProductResponse,
            UserOrderResponse, UserResponse,
        },
    },
    model::{
        Category as CategoryModel, Order as OrderModel, OrderLine as OrderLineModel,
        Product as ProductModel, User as UserModel, UserOrder as UserOrderModel,
    },
    repository::Repositories,
    service::{
        CategoryReferenceGuard, EntityLabels, EntityService, EntityServiceDeps, PassThroughGuard,
        PasswordHashingGuard, ScopedLabels, ScopedListService, StatusReferenceGuard,
    },
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub user_service: DynUserService,
    pub category_service: DynCategoryService,
    pub product_service: DynProductService,
    pub order_service: DynOrderService,
    pub order_line_service: DynOrderLineService,
    pub user_order_service: DynUserOrderService,
    pub order_lines_by_order: DynScopedListService<OrderLineResponse>,
    pub user_orders_by_user: DynScopedListService<UserOrderResponse>,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("user_service", &"<UserService>")
            .field("category_service", &"<CategoryService>")
            .field("product_service", &"<ProductService>")
            .field("order_service", &"<OrderService>")
            .field("order_line_service", &"<OrderLineService>")
            .field("user_order_service", &"<UserOrderService>")
            .field("order_lines_by_order", &"<OrderLinesByOrderService>")
            .field("user_orders_by_user", &"<UserOrdersByUserService>")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub repositories: Repositories,
    pub hash: DynHashing,
    pub registry: Arc<Mutex<Registry>>,
    pub expose_internal_errors: bool,
}

impl fmt::Debug for DependenciesInjectDeps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInjectDeps")
            .field("repositories", &self.repositories)
            .field("hash", &"<Hashing>")
            .field("expose_internal_errors", &self.expose_internal_errors)
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            repositories,
            hash,
            registry,
            expose_internal_errors,
        } = deps;

        let user_service: EntityService<UserModel, UserRequest, UserResponse> =
            EntityService::new(EntityServiceDeps {
                repository: repositories.users.clone(),
                guard: Arc::new(PasswordHashingGuard::new(hash)),
                labels: EntityLabels::USER,
                registry: registry.clone(),
                expose_internal_errors,
            })
            .await;

        let category_service: EntityService<CategoryModel, CategoryRequest, CategoryResponse> =
            EntityService::new(EntityServiceDeps {
                repository: repositories.categories.clone(),
                guard: Arc::new(PassThroughGuard),
                labels: EntityLabels::CATEGORY,
                registry: registry.clone(),
                expose_internal_errors,
            })
            .await;

        let product_service: EntityService<ProductModel, ProductRequest, ProductResponse> =
            EntityService::new(EntityServiceDeps {
                repository: repositories.products.clone(),
                guard: Arc::new(CategoryReferenceGuard::new(repositories.categories.clone())),
                labels: EntityLabels::PRODUCT,
                registry: registry.clone(),
                expose_internal_errors,
            })
            .await;

        let order_service: EntityService<OrderModel, OrderRequest, OrderResponse> =
            EntityService::new(EntityServiceDeps {
                repository: repositories.orders.clone(),
                guard: Arc::new(StatusReferenceGuard::new(repositories.statuses.clone())),
                labels: EntityLabels::ORDER,
                registry: registry.clone(),
                expose_internal_errors,
            })
            .await;

        let order_line_service: EntityService<OrderLineModel, OrderLineRequest, OrderLineResponse> =
            EntityService::new(EntityServiceDeps {
                repository: repositories.order_lines.clone(),
                guard: Arc::new(PassThroughGuard),
                labels: EntityLabels::ORDER_LINE,
                registry: registry.clone(),
                expose_internal_errors,
            })
            .await;

        let user_order_service: EntityService<UserOrderModel, UserOrderRequest, UserOrderResponse> =
            EntityService::new(EntityServiceDeps {
                repository: repositories.user_orders.clone(),
                guard: Arc::new(PassThroughGuard),
                labels: EntityLabels::USER_ORDER,
                registry: registry.clone(),
                expose_internal_errors,
            })
            .await;

        let order_lines_by_order: ScopedListService<OrderLineModel, OrderLineResponse> =
            ScopedListService::new(
                repositories.order_lines_by_order.clone(),
                ScopedLabels::ORDER_LINES_BY_ORDER,
                registry.clone(),
                expose_internal_errors,
            )
            .await;

        let user_orders_by_user: ScopedListService<UserOrderModel, UserOrderResponse> =
            ScopedListService::new(
                repositories.user_orders_by_user.clone(),
                ScopedLabels::USER_ORDERS_BY_USER,
                registry,
                expose_internal_errors,
            )
            .await;

        Self {
            user_service: Arc::new(user_service) as DynUserService,
            category_service: Arc::new(category_service) as DynCategoryService,
            product_service: Arc::new(product_service) as DynProductService,
            order_service: Arc::new(order_service) as DynOrderService,
            order_line_service: Arc::new(order_line_service) as DynOrderLineService,
            user_order_service: Arc::new(user_order_service) as DynUserOrderService,
            order_lines_by_order: Arc::new(order_lines_by_order)
                as DynScopedListService<OrderLineResponse>,
            user_orders_by_user: Arc::new(user_orders_by_user)
                as DynScopedListService<UserOrderResponse>,
        }
    }
}
