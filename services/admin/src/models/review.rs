//! Review model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validation;
use common::error::{StoreError, StoreResult};

/// Review entity; each review references the product it rates
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub product_id: Uuid,
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New review creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub product_id: Uuid,
    pub reviewer_name: String,
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

impl NewReview {
    /// Validate all fields before any write is attempted
    pub fn validate(&self) -> StoreResult<()> {
        validation::validate_reviewer_name(&self.reviewer_name)
            .map_err(|m| StoreError::validation("reviewer_name", m))?;
        validation::validate_rating(self.rating)
            .map_err(|m| StoreError::validation("rating", m))?;
        Ok(())
    }
}

/// Review update payload; the product reference is immutable
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateReview {
    pub reviewer_name: Option<String>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

impl UpdateReview {
    /// Validate the provided fields before any write is attempted
    pub fn validate(&self) -> StoreResult<()> {
        if let Some(reviewer_name) = &self.reviewer_name {
            validation::validate_reviewer_name(reviewer_name)
                .map_err(|m| StoreError::validation("reviewer_name", m))?;
        }
        if let Some(rating) = self.rating {
            validation::validate_rating(rating)
                .map_err(|m| StoreError::validation("rating", m))?;
        }
        Ok(())
    }
}
