//! Category repository for database operations

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{Category, NewCategory, UpdateCategory};
use crate::validation::slugify;
use common::error::{StoreError, StoreResult};

/// Category repository
#[derive(Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new category; the slug is derived from the name
    pub async fn create(&self, new_category: &NewCategory) -> StoreResult<Category> {
        new_category.validate()?;

        info!("Creating new category: {}", new_category.name);

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, name, slug, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, slug, description, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_category.name)
        .bind(slugify(&new_category.name))
        .bind(&new_category.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_write(e, "category"))?;

        Ok(category)
    }

    /// Get all categories
    pub async fn get_all(&self) -> StoreResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, description, created_at, updated_at
            FROM categories
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        Ok(categories)
    }

    /// Find a category by ID
    pub async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, description, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        Ok(category)
    }

    /// Apply a partial update; a new name re-derives the slug in the same
    /// statement so name and slug can never drift apart
    pub async fn update(&self, id: Uuid, changes: &UpdateCategory) -> StoreResult<Category> {
        changes.validate()?;

        info!("Updating category: {}", id);

        let slug = changes.name.as_deref().map(slugify);

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, slug, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(slug)
        .bind(&changes.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::from_write(e, "category"))?
        .ok_or(StoreError::NotFound {
            resource: "category",
        })?;

        Ok(category)
    }

    /// Delete a category by ID
    pub async fn delete(&self, id: Uuid) -> StoreResult<()> {
        info!("Deleting category: {}", id);

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Query)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                resource: "category",
            });
        }

        Ok(())
    }
}
