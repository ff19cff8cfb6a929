use crate::{
    abstract_trait::EntityRepositoryTrait, config::ConnectionPool,
    domain::requests::OrderRequest, errors::RepositoryError, model::Order as OrderModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderRepository {
    db: ConnectionPool,
}

impl OrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityRepositoryTrait<OrderModel, OrderRequest> for OrderRepository {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT o.id, o.status_id, o.value, s.name AS status_name
            FROM orders o
            LEFT JOIN statuses s ON s.id = o.status_id
            ORDER BY o.id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch orders: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("✅ Fetched {} orders", orders.len());
        Ok(orders)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT o.id, o.status_id, o.value, s.name AS status_name
            FROM orders o
            LEFT JOIN statuses s ON s.id = o.status_id
            WHERE o.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch order ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })
    }

    async fn create(&self, req: &OrderRequest) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            WITH o AS (
                INSERT INTO orders (status_id, value)
                VALUES ($1, $2)
                RETURNING *
            )
            SELECT o.id, o.status_id, o.value, s.name AS status_name
            FROM o
            LEFT JOIN statuses s ON s.id = o.status_id
            "#,
        )
        .bind(req.status_id)
        .bind(req.value)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create order: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created order ID {} (value {})", order.id, order.value);
        Ok(order)
    }

    async fn update(
        &self,
        id: i32,
        req: &OrderRequest,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            WITH o AS (
                UPDATE orders
                SET status_id = $2,
                    value = $3
                WHERE id = $1
                RETURNING *
            )
            SELECT o.id, o.status_id, o.value, s.name AS status_name
            FROM o
            LEFT JOIN statuses s ON s.id = o.status_id
            "#,
        )
        .bind(id)
        .bind(req.status_id)
        .bind(req.value)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update order ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if order.is_some() {
            info!("🔄 Updated order ID {id}");
        }
        Ok(order)
    }

    async fn delete(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            WITH o AS (
                DELETE FROM orders WHERE id = $1 RETURNING *
            )
            SELECT o.id, o.status_id, o.value, s.name AS status_name
            FROM o
            LEFT JOIN statuses s ON s.id = o.status_id
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete order ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if order.is_some() {
            info!("🗑️ Deleted order ID {id} with its lines and user links");
        }
        Ok(order)
    }
}
