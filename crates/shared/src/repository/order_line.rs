use crate::{
    abstract_trait::{EntityRepositoryTrait, ScopedRepositoryTrait},
    config::ConnectionPool,
    domain::requests::OrderLineRequest,
    errors::RepositoryError,
    model::OrderLine as OrderLineModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderLineRepository {
    db: ConnectionPool,
}

impl OrderLineRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityRepositoryTrait<OrderLineModel, OrderLineRequest> for OrderLineRepository {
    async fn find_all(&self) -> Result<Vec<OrderLineModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let lines = sqlx::query_as::<_, OrderLineModel>(
            "SELECT id, order_id, product_id FROM order_products ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch order lines: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("✅ Fetched {} order lines", lines.len());
        Ok(lines)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderLineModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, OrderLineModel>(
            "SELECT id, order_id, product_id FROM order_products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch order line ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })
    }

    async fn create(&self, req: &OrderLineRequest) -> Result<OrderLineModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let line = sqlx::query_as::<_, OrderLineModel>(
            r#"
            INSERT INTO order_products (order_id, product_id)
            VALUES ($1, $2)
            RETURNING id, order_id, product_id
            "#,
        )
        .bind(req.order_id)
        .bind(req.product_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to add product {} to order {}: {:?}",
                req.product_id, req.order_id, err
            );
            RepositoryError::from(err)
        })?;

        info!("✅ Created order line ID {}", line.id);
        Ok(line)
    }

    async fn update(
        &self,
        id: i32,
        req: &OrderLineRequest,
    ) -> Result<Option<OrderLineModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, OrderLineModel>(
            r#"
            UPDATE order_products
            SET order_id = $2,
                product_id = $3
            WHERE id = $1
            RETURNING id, order_id, product_id
            "#,
        )
        .bind(id)
        .bind(req.order_id)
        .bind(req.product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update order line ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })
    }

    async fn delete(&self, id: i32) -> Result<Option<OrderLineModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, OrderLineModel>(
            "DELETE FROM order_products WHERE id = $1 RETURNING id, order_id, product_id",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete order line ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })
    }
}

#[async_trait]
impl ScopedRepositoryTrait<OrderLineModel> for OrderLineRepository {
    async fn find_by_parent(&self, order_id: i32) -> Result<Vec<OrderLineModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, OrderLineModel>(
            "SELECT id, order_id, product_id FROM order_products WHERE order_id = $1 ORDER BY id",
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch lines of order {}: {:?}", order_id, err);
            RepositoryError::from(err)
        })
    }
}
