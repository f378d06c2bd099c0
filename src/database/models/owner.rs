use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Owner {
    pub id: Uuid,
    pub name: Option<String>,
    pub about: Option<String>,
    pub photo: Option<String>,
}

/// Flat creation body; absent fields persist as NULL
#[derive(Debug, Deserialize)]
pub struct OwnerPayload {
    pub name: Option<String>,
    pub about: Option<String>,
    pub photo: Option<String>,
}

impl Owner {
    pub async fn list(pool: &PgPool) -> Result<Vec<Owner>, DatabaseError> {
        let owners =
            sqlx::query_as::<_, Owner>("SELECT id, name, about, photo FROM owners ORDER BY name")
                .fetch_all(pool)
                .await?;
        Ok(owners)
    }

    pub async fn find(pool: &PgPool, id: Uuid) -> Result<Option<Owner>, DatabaseError> {
        let owner =
            sqlx::query_as::<_, Owner>("SELECT id, name, about, photo FROM owners WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(owner)
    }

    pub async fn insert(pool: &PgPool, payload: OwnerPayload) -> Result<Uuid, DatabaseError> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO owners (id, name, about, photo) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(&payload.name)
            .bind(&payload.about)
            .bind(&payload.photo)
            .execute(pool)
            .await?;
        Ok(id)
    }
}
