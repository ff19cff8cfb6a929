use crate::{
    abstract_trait::{EntityRepositoryTrait, ScopedRepositoryTrait},
    config::ConnectionPool,
    domain::requests::UserOrderRequest,
    errors::RepositoryError,
    model::UserOrder as UserOrderModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserOrderRepository {
    db: ConnectionPool,
}

impl UserOrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityRepositoryTrait<UserOrderModel, UserOrderRequest> for UserOrderRepository {
    async fn find_all(&self) -> Result<Vec<UserOrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let links = sqlx::query_as::<_, UserOrderModel>(
            "SELECT id, user_id, order_id FROM user_orders ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch user orders: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("✅ Fetched {} user orders", links.len());
        Ok(links)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<UserOrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, UserOrderModel>(
            "SELECT id, user_id, order_id FROM user_orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch user order ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })
    }

    async fn create(&self, req: &UserOrderRequest) -> Result<UserOrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let link = sqlx::query_as::<_, UserOrderModel>(
            r#"
            INSERT INTO user_orders (user_id, order_id)
            VALUES ($1, $2)
            RETURNING id, user_id, order_id
            "#,
        )
        .bind(req.user_id)
        .bind(req.order_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to link order {} to user {}: {:?}",
                req.order_id, req.user_id, err
            );
            RepositoryError::from(err)
        })?;

        info!("✅ Created user order ID {}", link.id);
        Ok(link)
    }

    async fn update(
        &self,
        id: i32,
        req: &UserOrderRequest,
    ) -> Result<Option<UserOrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, UserOrderModel>(
            r#"
            UPDATE user_orders
            SET user_id = $2,
                order_id = $3
            WHERE id = $1
            RETURNING id, user_id, order_id
            "#,
        )
        .bind(id)
        .bind(req.user_id)
        .bind(req.order_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update user order ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })
    }

    async fn delete(&self, id: i32) -> Result<Option<UserOrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, UserOrderModel>(
            "DELETE FROM user_orders WHERE id = $1 RETURNING id, user_id, order_id",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete user order ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })
    }
}

#[async_trait]
impl ScopedRepositoryTrait<UserOrderModel> for UserOrderRepository {
    async fn find_by_parent(&self, user_id: i32) -> Result<Vec<UserOrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, UserOrderModel>(
            "SELECT id, user_id, order_id FROM user_orders WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch orders of user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })
    }
}
