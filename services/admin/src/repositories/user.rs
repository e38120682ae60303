//! User repository for database operations

use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;
use uuid::Uuid;

use crate::models::{IdentitySync, UpdateUser, User};
use common::error::{StoreError, StoreResult};

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upsert a user from an identity-provider sync event, keyed on the
    /// external id. Repeated or re-ordered deliveries converge on the same
    /// row. An existing row keeps its role; the provider payload only sets
    /// the role on first insert.
    pub async fn sync_from_identity(&self, payload: &IdentitySync) -> StoreResult<User> {
        payload.validate()?;

        info!("Syncing user from identity provider: {}", payload.external_id);

        let role = payload.role.unwrap_or_default();

        let row = sqlx::query(
            r#"
            INSERT INTO users (id, external_id, email, username, full_name, role, avatar_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (external_id) DO UPDATE SET
                email = EXCLUDED.email,
                username = EXCLUDED.username,
                full_name = EXCLUDED.full_name,
                avatar_url = EXCLUDED.avatar_url,
                updated_at = now()
            RETURNING id, external_id, email, username, full_name, role, avatar_url,
                      created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&payload.external_id)
        .bind(&payload.email)
        .bind(&payload.username)
        .bind(&payload.full_name)
        .bind(role.as_str())
        .bind(&payload.avatar_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_write(e, "user"))?;

        Ok(map_user(&row))
    }

    /// Get all users
    pub async fn get_all(&self) -> StoreResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, external_id, email, username, full_name, role, avatar_url,
                   created_at, updated_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        Ok(rows.iter().map(map_user).collect())
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        info!("Finding user by ID: {}", id);

        let row = sqlx::query(
            r#"
            SELECT id, external_id, email, username, full_name, role, avatar_url,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        Ok(row.as_ref().map(map_user))
    }

    /// Find a user by identity-provider subject id
    pub async fn find_by_external_id(&self, external_id: &str) -> StoreResult<Option<User>> {
        info!("Finding user by external ID: {}", external_id);

        let row = sqlx::query(
            r#"
            SELECT id, external_id, email, username, full_name, role, avatar_url,
                   created_at, updated_at
            FROM users
            WHERE external_id = $1
            "#,
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        Ok(row.as_ref().map(map_user))
    }

    /// Apply a partial update. The payload carries no external-id field,
    /// so the identity reference can never change after creation.
    pub async fn update(&self, id: Uuid, changes: &UpdateUser) -> StoreResult<User> {
        changes.validate()?;

        info!("Updating user: {}", id);

        let role = changes.role.map(|r| r.as_str());

        let row = sqlx::query(
            r#"
            UPDATE users
            SET email = COALESCE($2, email),
                username = COALESCE($3, username),
                full_name = COALESCE($4, full_name),
                avatar_url = COALESCE($5, avatar_url),
                role = COALESCE($6, role),
                updated_at = now()
            WHERE id = $1
            RETURNING id, external_id, email, username, full_name, role, avatar_url,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&changes.email)
        .bind(&changes.username)
        .bind(&changes.full_name)
        .bind(&changes.avatar_url)
        .bind(role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::from_write(e, "user"))?
        .ok_or(StoreError::NotFound { resource: "user" })?;

        Ok(map_user(&row))
    }

    /// Delete a user by ID
    pub async fn delete(&self, id: Uuid) -> StoreResult<()> {
        info!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Query)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { resource: "user" });
        }

        Ok(())
    }
}

/// Map a database row to a user; an unrecognized role value falls back to
/// the default role rather than failing the read
fn map_user(row: &PgRow) -> User {
    let role: String = row.get("role");

    User {
        id: row.get("id"),
        external_id: row.get("external_id"),
        email: row.get("email"),
        username: row.get("username"),
        full_name: row.get("full_name"),
        role: role.parse().unwrap_or_default(),
        avatar_url: row.get("avatar_url"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
