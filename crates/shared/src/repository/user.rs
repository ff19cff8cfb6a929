use crate::{
    abstract_trait::EntityRepositoryTrait, config::ConnectionPool,
    domain::requests::UserRequest, errors::RepositoryError, model::User as UserModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct UserRepository {
    db: ConnectionPool,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityRepositoryTrait<UserModel, UserRequest> for UserRepository {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let users = sqlx::query_as::<_, UserModel>(
            "SELECT id, name, email, password FROM users ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch users: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("✅ Fetched {} users", users.len());
        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, UserModel>("SELECT id, name, email, password FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch user ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })
    }

    async fn create(&self, req: &UserRequest) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.password)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create user {}: {:?}", req.email, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created user ID {} ({})", user.id, user.email);
        Ok(user)
    }

    async fn update(
        &self,
        id: i32,
        req: &UserRequest,
    ) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE users
            SET name = $2,
                email = $3,
                password = $4
            WHERE id = $1
            RETURNING id, name, email, password
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.password)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update user ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if user.is_some() {
            info!("🔄 Updated user ID {id}");
        }
        Ok(user)
    }

    async fn delete(&self, id: i32) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            "DELETE FROM users WHERE id = $1 RETURNING id, name, email, password",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete user ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if user.is_some() {
            info!("🗑️ Deleted user ID {id}");
        }
        Ok(user)
    }
}
