//! User model and related functionality
//!
//! Users are never created through the admin API: they are synced from the
//! hosted identity provider via the webhook route. The external identity id
//! is the stable key of that sync and is immutable once stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validation;
use common::error::{StoreError, StoreResult};

/// Account role, stored as lowercase text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
    Moderator,
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Moderator => "moderator",
            Role::Guest => "guest",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            "moderator" => Ok(Role::Moderator),
            "guest" => Ok(Role::Guest),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub external_id: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sync payload delivered by the identity-provider webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentitySync {
    pub external_id: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Role to assign on first sync; defaults to `user` when omitted
    #[serde(default)]
    pub role: Option<Role>,
}

impl IdentitySync {
    /// Validate all fields before any write is attempted
    pub fn validate(&self) -> StoreResult<()> {
        validation::validate_external_id(&self.external_id)
            .map_err(|m| StoreError::validation("external_id", m))?;
        validation::validate_email(&self.email).map_err(|m| StoreError::validation("email", m))?;
        validation::validate_username(&self.username)
            .map_err(|m| StoreError::validation("username", m))?;
        validation::validate_full_name(&self.full_name)
            .map_err(|m| StoreError::validation("full_name", m))?;
        if let Some(url) = &self.avatar_url {
            validation::validate_avatar_url(url)
                .map_err(|m| StoreError::validation("avatar_url", m))?;
        }
        Ok(())
    }
}

/// User update payload; the external identity id is deliberately absent
/// because it can never change after the first sync
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Option<Role>,
}

impl UpdateUser {
    /// Validate the provided fields before any write is attempted
    pub fn validate(&self) -> StoreResult<()> {
        if let Some(email) = &self.email {
            validation::validate_email(email).map_err(|m| StoreError::validation("email", m))?;
        }
        if let Some(username) = &self.username {
            validation::validate_username(username)
                .map_err(|m| StoreError::validation("username", m))?;
        }
        if let Some(full_name) = &self.full_name {
            validation::validate_full_name(full_name)
                .map_err(|m| StoreError::validation("full_name", m))?;
        }
        if let Some(url) = &self.avatar_url {
            validation::validate_avatar_url(url)
                .map_err(|m| StoreError::validation("avatar_url", m))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults_to_user() {
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_role_round_trips_through_text() {
        for role in [Role::Admin, Role::User, Role::Moderator, Role::Guest] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_sync_payload_role_is_optional_in_json() {
        let payload: IdentitySync = serde_json::from_str(
            r#"{
                "external_id": "idp_123",
                "email": "ada@example.com",
                "username": "ada",
                "full_name": "Ada Lovelace"
            }"#,
        )
        .unwrap();
        assert_eq!(payload.role, None);
        assert_eq!(payload.avatar_url, None);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_sync_payload_rejects_bad_email() {
        let payload = IdentitySync {
            external_id: "idp_123".to_string(),
            email: "not-an-email".to_string(),
            username: "ada".to_string(),
            full_name: "Ada Lovelace".to_string(),
            avatar_url: None,
            role: None,
        };
        let err = payload.validate().unwrap_err();
        match err {
            common::error::StoreError::Validation { field, .. } => assert_eq!(field, "email"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
