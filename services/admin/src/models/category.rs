//! Category model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validation;
use common::error::{StoreError, StoreResult};

/// Category entity; the slug is derived from the name at write time
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New category creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

impl NewCategory {
    /// Validate all fields before any write is attempted
    pub fn validate(&self) -> StoreResult<()> {
        validation::validate_category_name(&self.name)
            .map_err(|m| StoreError::validation("name", m))?;
        validation::validate_category_description(&self.description)
            .map_err(|m| StoreError::validation("description", m))?;
        Ok(())
    }
}

/// Category update payload; a new name re-derives the slug
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateCategory {
    /// Validate the provided fields before any write is attempted
    pub fn validate(&self) -> StoreResult<()> {
        if let Some(name) = &self.name {
            validation::validate_category_name(name)
                .map_err(|m| StoreError::validation("name", m))?;
        }
        if let Some(description) = &self.description {
            validation::validate_category_description(description)
                .map_err(|m| StoreError::validation("description", m))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_validates() {
        let payload = NewCategory {
            name: "Electronics".to_string(),
            description: "Devices and gadgets".to_string(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_new_category_rejects_long_name() {
        let payload = NewCategory {
            name: "x".repeat(51),
            description: "Devices and gadgets".to_string(),
        };
        let err = payload.validate().unwrap_err();
        match err {
            StoreError::Validation { field, .. } => assert_eq!(field, "name"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_new_category_requires_description() {
        let payload = NewCategory {
            name: "Electronics".to_string(),
            description: "   ".to_string(),
        };
        let err = payload.validate().unwrap_err();
        match err {
            StoreError::Validation { field, .. } => assert_eq!(field, "description"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_update_with_no_fields_is_valid() {
        assert!(UpdateCategory::default().validate().is_ok());
    }
}
