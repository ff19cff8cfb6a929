mod category;
mod order;
mod order_line;
mod product;
mod status;
mod user;
mod user_order;

pub use self::category::CategoryRepository;
pub use self::order::OrderRepository;
pub use self::order_line::OrderLineRepository;
pub use self::product::ProductRepository;
pub use self::status::StatusRepository;
pub use self::user::UserRepository;
pub use self::user_order::UserOrderRepository;

use crate::{
    abstract_trait::{
        DynCategoryRepository, DynOrderLineRepository, DynOrderRepository, DynProductRepository,
        DynScopedRepository, DynStatusRepository, DynUserOrderRepository, DynUserRepository,
    },
    config::ConnectionPool,
    model::{OrderLine as OrderLineModel, UserOrder as UserOrderModel},
};
use std::{fmt, sync::Arc};

/// Every table gateway the services need, behind their trait objects.
#[derive(Clone)]
pub struct Repositories {
    pub users: DynUserRepository,
    pub categories: DynCategoryRepository,
    pub products: DynProductRepository,
    pub statuses: DynStatusRepository,
    pub orders: DynOrderRepository,
    pub order_lines: DynOrderLineRepository,
    pub user_orders: DynUserOrderRepository,
    pub order_lines_by_order: DynScopedRepository<OrderLineModel>,
    pub user_orders_by_user: DynScopedRepository<UserOrderModel>,
}

impl Repositories {
    pub fn new(pool: ConnectionPool) -> Self {
        let order_lines = Arc::new(OrderLineRepository::new(pool.clone()));
        let user_orders = Arc::new(UserOrderRepository::new(pool.clone()));

        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            categories: Arc::new(CategoryRepository::new(pool.clone())),
            products: Arc::new(ProductRepository::new(pool.clone())),
            statuses: Arc::new(StatusRepository::new(pool.clone())),
            orders: Arc::new(OrderRepository::new(pool)),
            order_lines: order_lines.clone(),
            user_orders: user_orders.clone(),
            order_lines_by_order: order_lines,
            user_orders_by_user: user_orders,
        }
    }
}

impl fmt::Debug for Repositories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repositories").finish_non_exhaustive()
    }
}
