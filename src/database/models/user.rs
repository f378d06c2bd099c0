use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;

/// Account record. Account management lives in the external login service;
/// this side only reads the row and maintains the default-address pointer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub default_address_id: Option<Uuid>,
}

impl User {
    pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, default_address_id FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }

    /// Point the user's default address at one of their address records.
    /// Returns false when the user row does not exist.
    pub async fn set_default_address(
        pool: &PgPool,
        user_id: Uuid,
        address_id: Uuid,
    ) -> Result<bool, DatabaseError> {
        let result = sqlx::query("UPDATE users SET default_address_id = $1 WHERE id = $2")
            .bind(address_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
