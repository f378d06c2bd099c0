use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Flat creation body; `type` is the only field the original API accepted
#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, DatabaseError> {
        let categories =
            sqlx::query_as::<_, Category>(r#"SELECT id, "type" FROM categories ORDER BY "type""#)
                .fetch_all(pool)
                .await?;
        Ok(categories)
    }

    pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Category>, DatabaseError> {
        let category =
            sqlx::query_as::<_, Category>(r#"SELECT id, "type" FROM categories WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(category)
    }

    pub async fn insert(pool: &PgPool, payload: CategoryPayload) -> Result<Uuid, DatabaseError> {
        let id = Uuid::new_v4();
        sqlx::query(r#"INSERT INTO categories (id, "type") VALUES ($1, $2)"#)
            .bind(id)
            .bind(&payload.kind)
            .execute(pool)
            .await?;
        Ok(id)
    }
}
