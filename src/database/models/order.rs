use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseError;

/// Order line item, stored as JSONB on the order record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "productId")]
    pub product_id: Uuid,
    pub quantity: i32,
}

/// Order, owned by the user whose credential created it. Like addresses,
/// every access path filters by the owning identity.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Json<Vec<OrderItem>>,
    pub estimated_delivery: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub estimated_delivery: Option<String>,
}

impl Order {
    pub async fn insert(
        pool: &PgPool,
        user_id: Uuid,
        payload: OrderPayload,
    ) -> Result<Uuid, DatabaseError> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO orders (id, user_id, items, estimated_delivery) VALUES ($1, $2, $3, $4)",
        )
        .bind(id)
        .bind(user_id)
        .bind(Json(&payload.items))
        .bind(&payload.estimated_delivery)
        .execute(pool)
        .await?;
        Ok(id)
    }

    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Order>, DatabaseError> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, user_id, items, estimated_delivery, created_at \
             FROM orders WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(orders)
    }

    pub async fn find_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Order, DatabaseError> {
        sqlx::query_as::<_, Order>(
            "SELECT id, user_id, items, estimated_delivery, created_at \
             FROM orders WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound("Order not found".to_string()))
    }

    pub async fn delete_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_items_use_wire_spelling() {
        let body = serde_json::json!({
            "items": [{ "productId": Uuid::new_v4(), "quantity": 2 }]
        });
        let payload: OrderPayload = serde_json::from_value(body).unwrap();
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.items[0].quantity, 2);
        assert_eq!(payload.estimated_delivery, None);
    }
}
