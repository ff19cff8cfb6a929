use crate::{
    abstract_trait::{EntityRepositoryTrait, ScopedRepositoryTrait, StatusRepositoryTrait},
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
    repository::Repositories,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::Mutex;

struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn contains(&self, id: i32) -> bool {
        self.rows.contains_key(&id)
    }
}

struct Tables {
    users: Table<UserModel>,
    categories: Table<CategoryModel>,
    products: Table<ProductModel>,
    statuses: BTreeMap<i32, String>,
    orders: Table<OrderModel>,
    order_lines: Table<OrderLineModel>,
    user_orders: Table<UserOrderModel>,
}

impl Tables {
    fn product_view(&self, product: &ProductModel) -> ProductModel {
        let mut view = product.clone();
        view.category_name = product
            .category_id
            .and_then(|id| self.categories.rows.get(&id))
            .map(|category| category.name.clone());
        view
    }

    fn order_view(&self, order: &OrderModel) -> OrderModel {
        let mut view = order.clone();
        view.status_name = self.statuses.get(&order.status_id).cloned();
        view
    }

    fn check_product(&self, id: Option<i32>, req: &ProductRequest) -> Result<(), RepositoryError> {
        if req.price <= Decimal::ZERO {
            return Err(RepositoryError::Constraint(
                "products_price_check".to_string(),
            ));
        }
        if !self.categories.contains(req.category_id) {
            return Err(RepositoryError::ForeignKey(
                "products_category_id_fkey".to_string(),
            ));
        }
        let taken = self
            .products
            .rows
            .values()
            .any(|p| p.name == req.name && Some(p.id) != id);
        if taken {
            return Err(RepositoryError::AlreadyExists(
                "ix_products_name_unique".to_string(),
            ));
        }
        Ok(())
    }

    fn check_order(&self, req: &OrderRequest) -> Result<(), RepositoryError> {
        if req.value <= Decimal::ZERO {
            return Err(RepositoryError::Constraint("orders_value_check".to_string()));
        }
        if !self.statuses.contains_key(&req.status_id) {
            return Err(RepositoryError::ForeignKey(
                "orders_status_id_fkey".to_string(),
            ));
        }
        Ok(())
    }

    fn check_order_line(&self, req: &OrderLineRequest) -> Result<(), RepositoryError> {
        if !self.orders.contains(req.order_id) {
            return Err(RepositoryError::ForeignKey(
                "order_products_order_id_fkey".to_string(),
            ));
        }
        if !self.products.contains(req.product_id) {
            return Err(RepositoryError::ForeignKey(
                "order_products_product_id_fkey".to_string(),
            ));
        }
        Ok(())
    }

    fn check_user_order(&self, req: &UserOrderRequest) -> Result<(), RepositoryError> {
        if !self.users.contains(req.user_id) {
            return Err(RepositoryError::ForeignKey(
                "user_orders_user_id_fkey".to_string(),
            ));
        }
        if !self.orders.contains(req.order_id) {
            return Err(RepositoryError::ForeignKey(
                "user_orders_order_id_fkey".to_string(),
            ));
        }
        Ok(())
    }
}

pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables {
                users: Table::new(),
                categories: Table::new(),
                products: Table::new(),
                statuses: BTreeMap::new(),
                orders: Table::new(),
                order_lines: Table::new(),
                user_orders: Table::new(),
            }),
        }
    }

    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            users: self.clone(),
            categories: self.clone(),
            products: self.clone(),
            statuses: self.clone(),
            orders: self.clone(),
            order_lines: self.clone(),
            user_orders: self.clone(),
            order_lines_by_order: self.clone(),
            user_orders_by_user: self.clone(),
        }
    }

    /// Stored password of a user, for asserting on hashing.
    pub async fn stored_password(&self, user_id: i32) -> Option<String> {
        let tables = self.tables.lock().await;
        tables.users.rows.get(&user_id).map(|u| u.password.clone())
    }

    pub async fn product_count(&self) -> usize {
        self.tables.lock().await.products.rows.len()
    }

    pub async fn order_line_count(&self) -> usize {
        self.tables.lock().await.order_lines.rows.len()
    }

    pub async fn user_order_count(&self) -> usize {
        self.tables.lock().await.user_orders.rows.len()
    }
}

#[async_trait]
impl EntityRepositoryTrait<UserModel, UserRequest> for MemoryStore {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.users.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<UserModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.users.rows.get(&id).cloned())
    }

    async fn create(&self, req: &UserRequest) -> Result<UserModel, RepositoryError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.users.insert_with(|id| UserModel {
            id,
            name: Some(req.name.clone()),
            email: req.email.clone(),
            password: req.password.clone(),
        }))
    }

    async fn update(
        &self,
        id: i32,
        req: &UserRequest,
    ) -> Result<Option<UserModel>, RepositoryError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.users.rows.get_mut(&id).map(|user| {
            user.name = Some(req.name.clone());
            user.email = req.email.clone();
            user.password = req.password.clone();
            user.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<UserModel>, RepositoryError> {
        let mut tables = self.tables.lock().await;
        if tables.user_orders.rows.values().any(|link| link.user_id == id) {
            return Err(RepositoryError::ForeignKey(
                "user_orders_user_id_fkey".to_string(),
            ));
        }
        Ok(tables.users.rows.remove(&id))
    }
}

#[async_trait]
impl EntityRepositoryTrait<CategoryModel, CategoryRequest> for MemoryStore {
    async fn find_all(&self) -> Result<Vec<CategoryModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.categories.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CategoryModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.categories.rows.get(&id).cloned())
    }

    async fn create(&self, req: &CategoryRequest) -> Result<CategoryModel, RepositoryError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.categories.insert_with(|id| CategoryModel {
            id,
            name: req.name.clone(),
            description: Some(req.description.clone()),
            path_image: Some(req.path_image.clone()),
        }))
    }

    async fn update(
        &self,
        id: i32,
        req: &CategoryRequest,
    ) -> Result<Option<CategoryModel>, RepositoryError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.categories.rows.get_mut(&id).map(|category| {
            category.name = req.name.clone();
            category.description = Some(req.description.clone());
            category.path_image = Some(req.path_image.clone());
            category.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<CategoryModel>, RepositoryError> {
        let mut tables = self.tables.lock().await;
        let referenced = tables
            .products
            .rows
            .values()
            .any(|p| p.category_id == Some(id));
        if referenced {
            return Err(RepositoryError::ForeignKey(
                "products_category_id_fkey".to_string(),
            ));
        }
        Ok(tables.categories.rows.remove(&id))
    }
}

#[async_trait]
impl EntityRepositoryTrait<ProductModel, ProductRequest> for MemoryStore {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .products
            .rows
            .values()
            .map(|p| tables.product_view(p))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.products.rows.get(&id).map(|p| tables.product_view(p)))
    }

    async fn create(&self, req: &ProductRequest) -> Result<ProductModel, RepositoryError> {
        let mut tables = self.tables.lock().await;
        tables.check_product(None, req)?;

        let product = tables.products.insert_with(|id| ProductModel {
            id,
            name: req.name.clone(),
            price: req.price,
            base_description: req.base_description.clone(),
            full_description: req.full_description.clone(),
            path_image: Some(req.path_image.clone()),
            category_id: Some(req.category_id),
            category_name: None,
        });
        Ok(tables.product_view(&product))
    }

    async fn update(
        &self,
        id: i32,
        req: &ProductRequest,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let mut tables = self.tables.lock().await;
        if !tables.products.contains(id) {
            return Ok(None);
        }
        tables.check_product(Some(id), req)?;

        let updated = tables.products.rows.get_mut(&id).map(|product| {
            product.name = req.name.clone();
            product.price = req.price;
            product.base_description = req.base_description.clone();
            product.full_description = req.full_description.clone();
            product.path_image = Some(req.path_image.clone());
            product.category_id = Some(req.category_id);
            product.clone()
        });
        Ok(updated.map(|p| tables.product_view(&p)))
    }

    async fn delete(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let mut tables = self.tables.lock().await;
        if tables.order_lines.rows.values().any(|l| l.product_id == id) {
            return Err(RepositoryError::ForeignKey(
                "order_products_product_id_fkey".to_string(),
            ));
        }
        let view = tables.products.rows.get(&id).map(|p| tables.product_view(p));
        tables.products.rows.remove(&id);
        Ok(view)
    }
}

#[async_trait]
impl StatusRepositoryTrait for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<StatusModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.statuses.get(&id).map(|name| StatusModel {
            id,
            name: name.clone(),
        }))
    }

    async fn seed(&self, statuses: &[StatusModel]) -> Result<u64, RepositoryError> {
        let mut tables = self.tables.lock().await;
        let mut inserted = 0;
        for status in statuses {
            if !tables.statuses.contains_key(&status.id) {
                tables.statuses.insert(status.id, status.name.clone());
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}

#[async_trait]
impl EntityRepositoryTrait<OrderModel, OrderRequest> for MemoryStore {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .orders
            .rows
            .values()
            .map(|o| tables.order_view(o))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.orders.rows.get(&id).map(|o| tables.order_view(o)))
    }

    async fn create(&self, req: &OrderRequest) -> Result<OrderModel, RepositoryError> {
        let mut tables = self.tables.lock().await;
        tables.check_order(req)?;

        let order = tables.orders.insert_with(|id| OrderModel {
            id,
            status_id: req.status_id,
            value: req.value,
            status_name: None,
        });
        Ok(tables.order_view(&order))
    }

    async fn update(
        &self,
        id: i32,
        req: &OrderRequest,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let mut tables = self.tables.lock().await;
        if !tables.orders.contains(id) {
            return Ok(None);
        }
        tables.check_order(req)?;

        let updated = tables.orders.rows.get_mut(&id).map(|order| {
            order.status_id = req.status_id;
            order.value = req.value;
            order.clone()
        });
        Ok(updated.map(|o| tables.order_view(&o)))
    }

    async fn delete(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        let mut tables = self.tables.lock().await;
        let Some(order) = tables.orders.rows.get(&id).map(|o| tables.order_view(o)) else {
            return Ok(None);
        };

        tables.orders.rows.remove(&id);
        tables.order_lines.rows.retain(|_, line| line.order_id != id);
        tables.user_orders.rows.retain(|_, link| link.order_id != id);

        Ok(Some(order))
    }
}

#[async_trait]
impl EntityRepositoryTrait<OrderLineModel, OrderLineRequest> for MemoryStore {
    async fn find_all(&self) -> Result<Vec<OrderLineModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.order_lines.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderLineModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.order_lines.rows.get(&id).cloned())
    }

    async fn create(&self, req: &OrderLineRequest) -> Result<OrderLineModel, RepositoryError> {
        let mut tables = self.tables.lock().await;
        tables.check_order_line(req)?;

        Ok(tables.order_lines.insert_with(|id| OrderLineModel {
            id,
            order_id: req.order_id,
            product_id: req.product_id,
        }))
    }

    async fn update(
        &self,
        id: i32,
        req: &OrderLineRequest,
    ) -> Result<Option<OrderLineModel>, RepositoryError> {
        let mut tables = self.tables.lock().await;
        if !tables.order_lines.contains(id) {
            return Ok(None);
        }
        tables.check_order_line(req)?;

        Ok(tables.order_lines.rows.get_mut(&id).map(|line| {
            line.order_id = req.order_id;
            line.product_id = req.product_id;
            line.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<OrderLineModel>, RepositoryError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.order_lines.rows.remove(&id))
    }
}

#[async_trait]
impl ScopedRepositoryTrait<OrderLineModel> for MemoryStore {
    async fn find_by_parent(&self, order_id: i32) -> Result<Vec<OrderLineModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .order_lines
            .rows
            .values()
            .filter(|line| line.order_id == order_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl EntityRepositoryTrait<UserOrderModel, UserOrderRequest> for MemoryStore {
    async fn find_all(&self) -> Result<Vec<UserOrderModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.user_orders.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<UserOrderModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.user_orders.rows.get(&id).cloned())
    }

    async fn create(&self, req: &UserOrderRequest) -> Result<UserOrderModel, RepositoryError> {
        let mut tables = self.tables.lock().await;
        tables.check_user_order(req)?;

        Ok(tables.user_orders.insert_with(|id| UserOrderModel {
            id,
            user_id: req.user_id,
            order_id: req.order_id,
        }))
    }

    async fn update(
        &self,
        id: i32,
        req: &UserOrderRequest,
    ) -> Result<Option<UserOrderModel>, RepositoryError> {
        let mut tables = self.tables.lock().await;
        if !tables.user_orders.contains(id) {
            return Ok(None);
        }
        tables.check_user_order(req)?;

        Ok(tables.user_orders.rows.get_mut(&id).map(|link| {
            link.user_id = req.user_id;
            link.order_id = req.order_id;
            link.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<UserOrderModel>, RepositoryError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.user_orders.rows.remove(&id))
    }
}

#[async_trait]
impl ScopedRepositoryTrait<UserOrderModel> for MemoryStore {
    async fn find_by_parent(&self, user_id: i32) -> Result<Vec<UserOrderModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .user_orders
            .rows
            .values()
            .filter(|link| link.user_id == user_id)
            .cloned()
            .collect())
    }
}
