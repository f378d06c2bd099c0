use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub order_id: Option<Uuid>,
    pub amount: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPayload {
    #[serde(rename = "orderID")]
    pub order_id: Option<Uuid>,
    pub amount: Option<Decimal>,
}

impl Payment {
    pub async fn insert(
        pool: &PgPool,
        user_id: Uuid,
        payload: PaymentPayload,
    ) -> Result<Uuid, DatabaseError> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO payments (id, user_id, order_id, amount) VALUES ($1, $2, $3, $4)")
            .bind(id)
            .bind(user_id)
            .bind(payload.order_id)
            .bind(payload.amount)
            .execute(pool)
            .await?;
        Ok(id)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Payment>, DatabaseError> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT id, user_id, order_id, amount, created_at \
             FROM payments ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(payments)
    }
}
