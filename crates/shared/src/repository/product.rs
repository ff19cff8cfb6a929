use crate::{
    abstract_trait::EntityRepositoryTrait, config::ConnectionPool,
    domain::requests::ProductRequest, errors::RepositoryError, model::Product as ProductModel,
};
use async_trait::async_trait;
use tracing::{error, info};

// Every statement returns the row joined with its category name, writes go
// through a CTE so the projection is resolved in the same round trip.

pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntityRepositoryTrait<ProductModel, ProductRequest> for ProductRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT
                p.id, p.name, p.price, p.base_description, p.full_description,
                p.path_image, p.category_id, c.name AS category_name
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch products: {:?}", err);
            RepositoryError::from(err)
        })?;

        info!("✅ Fetched {} products", products.len());
        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT
                p.id, p.name, p.price, p.base_description, p.full_description,
                p.path_image, p.category_id, c.name AS category_name
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })
    }

    async fn create(&self, req: &ProductRequest) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            WITH p AS (
                INSERT INTO products
                    (name, price, base_description, full_description, path_image, category_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
            )
            SELECT
                p.id, p.name, p.price, p.base_description, p.full_description,
                p.path_image, p.category_id, c.name AS category_name
            FROM p
            LEFT JOIN categories c ON c.id = p.category_id
            "#,
        )
        .bind(&req.name)
        .bind(req.price)
        .bind(&req.base_description)
        .bind(&req.full_description)
        .bind(&req.path_image)
        .bind(req.category_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product ID {} ({})", product.id, product.name);
        Ok(product)
    }

    async fn update(
        &self,
        id: i32,
        req: &ProductRequest,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            WITH p AS (
                UPDATE products
                SET name = $2,
                    price = $3,
                    base_description = $4,
                    full_description = $5,
                    path_image = $6,
                    category_id = $7
                WHERE id = $1
                RETURNING *
            )
            SELECT
                p.id, p.name, p.price, p.base_description, p.full_description,
                p.path_image, p.category_id, c.name AS category_name
            FROM p
            LEFT JOIN categories c ON c.id = p.category_id
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(req.price)
        .bind(&req.base_description)
        .bind(&req.full_description)
        .bind(&req.path_image)
        .bind(req.category_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if product.is_some() {
            info!("🔄 Updated product ID {id}");
        }
        Ok(product)
    }

    async fn delete(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            WITH p AS (
                DELETE FROM products WHERE id = $1 RETURNING *
            )
            SELECT
                p.id, p.name, p.price, p.base_description, p.full_description,
                p.path_image, p.category_id, c.name AS category_name
            FROM p
            LEFT JOIN categories c ON c.id = p.category_id
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if product.is_some() {
            info!("🗑️ Deleted product ID {id}");
        }
        Ok(product)
    }
}
