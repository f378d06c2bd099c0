use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub title: Option<String>,
    pub body: Option<String>,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Rating-only projection embedded into expanded products
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ReviewRating {
    pub id: Uuid,
    pub rating: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub rating: Option<i32>,
}

impl Review {
    pub async fn insert(
        pool: &PgPool,
        user_id: Uuid,
        product_id: Uuid,
        payload: ReviewPayload,
    ) -> Result<Uuid, DatabaseError> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO reviews (id, user_id, product_id, title, body, rating) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(id)
        .bind(user_id)
        .bind(product_id)
        .bind(&payload.title)
        .bind(&payload.body)
        .bind(payload.rating)
        .execute(pool)
        .await?;
        Ok(id)
    }

    pub async fn list_for_product(
        pool: &PgPool,
        product_id: Uuid,
    ) -> Result<Vec<Review>, DatabaseError> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT id, user_id, product_id, title, body, rating, created_at \
             FROM reviews WHERE product_id = $1 ORDER BY created_at DESC",
        )
        .bind(product_id)
        .fetch_all(pool)
        .await?;
        Ok(reviews)
    }

    pub async fn ratings_for_product(
        pool: &PgPool,
        product_id: Uuid,
    ) -> Result<Vec<ReviewRating>, DatabaseError> {
        let ratings = sqlx::query_as::<_, ReviewRating>(
            "SELECT id, rating FROM reviews WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_all(pool)
        .await?;
        Ok(ratings)
    }
}
