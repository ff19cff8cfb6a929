use crate::{
    abstract_trait::EntityRepositoryTrait, config::ConnectionPool,
    domain::requests::CategoryRequest, errors::RepositoryError,
    model::Category as CategoryModel,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct CategoryRepository {
    db: ConnectionPool,
}

impl CategoryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityRepositoryTrait<CategoryModel, CategoryRequest> for CategoryRepository {
    async fn find_all(&self) -> Result<Vec<CategoryModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let categories = sqlx::query_as::<_, CategoryModel>(
            "SELECT id, name, description, path_image FROM categories ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch categories: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("✅ Fetched {} categories", categories.len());
        Ok(categories)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CategoryModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, CategoryModel>(
            "SELECT id, name, description, path_image FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch category ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })
    }

    async fn create(&self, req: &CategoryRequest) -> Result<CategoryModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, CategoryModel>(
            r#"
            INSERT INTO categories (name, description, path_image)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, path_image
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.path_image)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create category {}: {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created category ID {} ({})", category.id, category.name);
        Ok(category)
    }

    async fn update(
        &self,
        id: i32,
        req: &CategoryRequest,
    ) -> Result<Option<CategoryModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, CategoryModel>(
            r#"
            UPDATE categories
            SET name = $2,
                description = $3,
                path_image = $4
            WHERE id = $1
            RETURNING id, name, description, path_image
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.path_image)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update category ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if category.is_some() {
            info!("🔄 Updated category ID {id}");
        }
        Ok(category)
    }

    async fn delete(&self, id: i32) -> Result<Option<CategoryModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, CategoryModel>(
            "DELETE FROM categories WHERE id = $1 RETURNING id, name, description, path_image",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete category ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if category.is_some() {
            info!("🗑️ Deleted category ID {id}");
        }
        Ok(category)
    }
}
