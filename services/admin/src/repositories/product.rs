//! Product repository for database operations

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{NewProduct, Product, UpdateProduct};
use common::error::{StoreError, StoreResult};

/// Product repository
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new product
    pub async fn create(&self, new_product: &NewProduct) -> StoreResult<Product> {
        new_product.validate()?;

        info!("Creating new product: {}", new_product.name);

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (id, name, description, price_cents)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price_cents, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_product.name)
        .bind(&new_product.description)
        .bind(new_product.price_cents)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_write(e, "product"))?;

        Ok(product)
    }

    /// Get all products
    pub async fn get_all(&self) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents, created_at, updated_at
            FROM products
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        Ok(products)
    }

    /// Find a product by ID
    pub async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        Ok(product)
    }

    /// Apply a partial update
    pub async fn update(&self, id: Uuid, changes: &UpdateProduct) -> StoreResult<Product> {
        changes.validate()?;

        info!("Updating product: {}", id);

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                price_cents = COALESCE($4, price_cents),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, description, price_cents, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.price_cents)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::from_write(e, "product"))?
        .ok_or(StoreError::NotFound {
            resource: "product",
        })?;

        Ok(product)
    }

    /// Delete a product by ID; its reviews are removed with it
    pub async fn delete(&self, id: Uuid) -> StoreResult<()> {
        info!("Deleting product: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Query)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                resource: "product",
            });
        }

        Ok(())
    }
}
