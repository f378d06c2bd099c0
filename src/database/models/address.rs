use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::database::manager::DatabaseError;

/// Delivery address, owned by the user whose credential created it. All
/// list/fetch/update/delete paths filter by the owning identity; one user's
/// addresses are never visible to another.
///
/// Wire field names keep the original API's spellings (`adresses` route,
/// `streetAdress` field) for client compatibility.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: Uuid,
    pub user_id: Uuid,
    pub country: Option<String>,
    pub full_name: Option<String>,
    pub street_adress: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<i32>,
    pub phone_number: Option<String>,
    pub delivery_instructions: Option<String>,
    pub security_code: Option<String>,
}

/// Flat creation body; absent fields persist as NULL. The owning identity
/// comes from the verified credential, never from the body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    pub country: Option<String>,
    pub full_name: Option<String>,
    pub street_adress: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<i32>,
    pub phone_number: Option<String>,
    pub delivery_instructions: Option<String>,
    pub security_code: Option<String>,
}

const COLUMNS: &str = "id, user_id, country, full_name, street_adress, city, state, \
                       zip_code, phone_number, delivery_instructions, security_code";

impl Address {
    pub async fn insert(
        pool: &PgPool,
        user_id: Uuid,
        payload: AddressPayload,
    ) -> Result<Uuid, DatabaseError> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO adresses (id, user_id, country, full_name, street_adress, city, state, \
             zip_code, phone_number, delivery_instructions, security_code) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(id)
        .bind(user_id)
        .bind(&payload.country)
        .bind(&payload.full_name)
        .bind(&payload.street_adress)
        .bind(&payload.city)
        .bind(&payload.state)
        .bind(payload.zip_code)
        .bind(&payload.phone_number)
        .bind(&payload.delivery_instructions)
        .bind(&payload.security_code)
        .execute(pool)
        .await?;
        Ok(id)
    }

    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Address>, DatabaseError> {
        let addresses = sqlx::query_as::<_, Address>(&format!(
            "SELECT {COLUMNS} FROM adresses WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(addresses)
    }

    pub async fn find_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Address, DatabaseError> {
        sqlx::query_as::<_, Address>(&format!(
            "SELECT {COLUMNS} FROM adresses WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound("Address not found".to_string()))
    }

    /// Partial update: only fields present with a non-empty value are
    /// applied; the target is located by both id and owning identity.
    /// Returns false when no matching record exists.
    pub async fn update_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        changes: AddressPayload,
    ) -> Result<bool, DatabaseError> {
        let Some(mut query) = Self::update_query(id, user_id, changes) else {
            // Nothing to change; still report whether the target exists
            return Ok(Self::find_for_user(pool, id, user_id).await.is_ok());
        };

        let result = query.build().execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    fn update_query(
        id: Uuid,
        user_id: Uuid,
        changes: AddressPayload,
    ) -> Option<QueryBuilder<'static, Postgres>> {
        let mut query = QueryBuilder::new("UPDATE adresses SET ");
        let mut any = false;

        // Empty strings count as absent, like the original API's falsy check
        {
            let mut sets = query.separated(", ");
            if let Some(country) = changes.country.filter(|s| !s.is_empty()) {
                sets.push("country = ").push_bind_unseparated(country);
                any = true;
            }
            if let Some(full_name) = changes.full_name.filter(|s| !s.is_empty()) {
                sets.push("full_name = ").push_bind_unseparated(full_name);
                any = true;
            }
            if let Some(street_adress) = changes.street_adress.filter(|s| !s.is_empty()) {
                sets.push("street_adress = ").push_bind_unseparated(street_adress);
                any = true;
            }
            if let Some(city) = changes.city.filter(|s| !s.is_empty()) {
                sets.push("city = ").push_bind_unseparated(city);
                any = true;
            }
            if let Some(state) = changes.state.filter(|s| !s.is_empty()) {
                sets.push("state = ").push_bind_unseparated(state);
                any = true;
            }
            if let Some(zip_code) = changes.zip_code {
                sets.push("zip_code = ").push_bind_unseparated(zip_code);
                any = true;
            }
            if let Some(phone_number) = changes.phone_number.filter(|s| !s.is_empty()) {
                sets.push("phone_number = ").push_bind_unseparated(phone_number);
                any = true;
            }
            if let Some(delivery_instructions) =
                changes.delivery_instructions.filter(|s| !s.is_empty())
            {
                sets.push("delivery_instructions = ")
                    .push_bind_unseparated(delivery_instructions);
                any = true;
            }
            if let Some(security_code) = changes.security_code.filter(|s| !s.is_empty()) {
                sets.push("security_code = ").push_bind_unseparated(security_code);
                any = true;
            }
        }

        if !any {
            return None;
        }

        query.push(" WHERE id = ");
        query.push_bind(id);
        query.push(" AND user_id = ");
        query.push_bind(user_id);
        Some(query)
    }

    pub async fn delete_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM adresses WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
