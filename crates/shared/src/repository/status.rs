use crate::{
    abstract_trait::StatusRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Status as StatusModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct StatusRepository {
    db: ConnectionPool,
}

impl StatusRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatusRepositoryTrait for StatusRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<StatusModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, StatusModel>("SELECT id, name FROM statuses WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch status ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })
    }

    async fn seed(&self, statuses: &[StatusModel]) -> Result<u64, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;
        let mut inserted = 0;

        for status in statuses {
            let result = sqlx::query(
                "INSERT INTO statuses (id, name) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING",
            )
            .bind(status.id)
            .bind(&status.name)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to seed status {}: {:?}", status.name, err);
                RepositoryError::from(err)
            })?;

            inserted += result.rows_affected();
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🌱 Seeded {inserted} statuses");
        Ok(inserted)
    }
}
