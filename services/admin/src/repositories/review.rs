//! Review repository for database operations

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{NewReview, Review, UpdateReview};
use common::error::{StoreError, StoreResult};

/// Review repository
#[derive(Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new review; a dangling product reference is rejected by
    /// the foreign key and reported as a missing product
    pub async fn create(&self, new_review: &NewReview) -> StoreResult<Review> {
        new_review.validate()?;

        info!("Creating new review for product: {}", new_review.product_id);

        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (id, product_id, reviewer_name, rating, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, product_id, reviewer_name, rating, comment, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_review.product_id)
        .bind(&new_review.reviewer_name)
        .bind(new_review.rating)
        .bind(&new_review.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_write(e, "product"))?;

        Ok(review)
    }

    /// Get all reviews
    pub async fn get_all(&self) -> StoreResult<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, product_id, reviewer_name, rating, comment, created_at, updated_at
            FROM reviews
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        Ok(reviews)
    }

    /// Find a review by ID
    pub async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Review>> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, product_id, reviewer_name, rating, comment, created_at, updated_at
            FROM reviews
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        Ok(review)
    }

    /// Apply a partial update; the product reference is immutable
    pub async fn update(&self, id: Uuid, changes: &UpdateReview) -> StoreResult<Review> {
        changes.validate()?;

        info!("Updating review: {}", id);

        let review = sqlx::query_as::<_, Review>(
            r#"
            UPDATE reviews
            SET reviewer_name = COALESCE($2, reviewer_name),
                rating = COALESCE($3, rating),
                comment = COALESCE($4, comment),
                updated_at = now()
            WHERE id = $1
            RETURNING id, product_id, reviewer_name, rating, comment, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.reviewer_name)
        .bind(changes.rating)
        .bind(&changes.comment)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::from_write(e, "review"))?
        .ok_or(StoreError::NotFound { resource: "review" })?;

        Ok(review)
    }

    /// Delete a review by ID
    pub async fn delete(&self, id: Uuid) -> StoreResult<()> {
        info!("Deleting review: {}", id);

        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Query)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { resource: "review" });
        }

        Ok(())
    }
}
