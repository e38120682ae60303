//! Product model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::validation;
use common::error::{StoreError, StoreResult};

/// Product entity; prices are stored as integer cents
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New product creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
}

impl NewProduct {
    /// Validate all fields before any write is attempted
    pub fn validate(&self) -> StoreResult<()> {
        validation::validate_product_name(&self.name)
            .map_err(|m| StoreError::validation("name", m))?;
        validation::validate_product_price(self.price_cents)
            .map_err(|m| StoreError::validation("price_cents", m))?;
        Ok(())
    }
}

/// Product update payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
}

impl UpdateProduct {
    /// Validate the provided fields before any write is attempted
    pub fn validate(&self) -> StoreResult<()> {
        if let Some(name) = &self.name {
            validation::validate_product_name(name)
                .map_err(|m| StoreError::validation("name", m))?;
        }
        if let Some(price_cents) = self.price_cents {
            validation::validate_product_price(price_cents)
                .map_err(|m| StoreError::validation("price_cents", m))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_validates() {
        let payload = NewProduct {
            name: "Mechanical Keyboard".to_string(),
            description: "Tenkeyless, hot-swappable".to_string(),
            price_cents: 12_900,
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let payload: NewProduct =
            serde_json::from_str(r#"{"name": "Desk Mat", "price_cents": 1900}"#).unwrap();
        assert_eq!(payload.description, "");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let payload = NewProduct {
            name: "Desk Mat".to_string(),
            description: String::new(),
            price_cents: -1,
        };
        let err = payload.validate().unwrap_err();
        match err {
            StoreError::Validation { field, .. } => assert_eq!(field, "price_cents"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_update_price_to_zero_is_valid() {
        let payload = UpdateProduct {
            price_cents: Some(0),
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
    }
}
