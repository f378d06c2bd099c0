use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{Category, Owner, Review};
use crate::database::models::review::ReviewRating;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub owner_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Flat creation/update body. The original API took owner and category as
/// `ownerID`/`categoryID`; those spellings are kept on the wire.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(rename = "ownerID")]
    pub owner_id: Option<Uuid>,
    #[serde(rename = "categoryID")]
    pub category_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i32>,
}

/// Product as served by list/fetch: owner, category and review ratings are
/// expanded into embedded data at read time. The join set is fixed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub owner: Option<Owner>,
    pub category: Option<Category>,
    pub reviews: Vec<ReviewRating>,
}

const COLUMNS: &str = "id, owner_id, category_id, title, description, photo, price, \
                       stock_quantity, created_at";

impl Product {
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, DatabaseError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products ORDER BY created_at DESC"
        ))
        .fetch_all(pool)
        .await?;
        Ok(products)
    }

    pub async fn find(pool: &PgPool, id: Uuid) -> Result<Product, DatabaseError> {
        sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM products WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DatabaseError::NotFound("Product not found".to_string()))
    }

    pub async fn insert(pool: &PgPool, payload: ProductPayload) -> Result<Uuid, DatabaseError> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO products (id, owner_id, category_id, title, description, photo, price, \
             stock_quantity) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(id)
        .bind(payload.owner_id)
        .bind(payload.category_id)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.photo)
        .bind(payload.price)
        .bind(payload.stock_quantity)
        .execute(pool)
        .await?;
        Ok(id)
    }

    /// Partial update: only fields present with a non-empty value are
    /// applied. Returns false when no record matches the id.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        changes: ProductPayload,
    ) -> Result<bool, DatabaseError> {
        let Some(mut query) = Self::update_query(id, changes) else {
            return Ok(Self::find(pool, id).await.is_ok());
        };

        let result = query.build().execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    fn update_query(id: Uuid, changes: ProductPayload) -> Option<QueryBuilder<'static, Postgres>> {
        let mut query = QueryBuilder::new("UPDATE products SET ");
        let mut any = false;

        // Empty strings count as absent, like the original API's falsy check
        {
            let mut sets = query.separated(", ");
            if let Some(owner_id) = changes.owner_id {
                sets.push("owner_id = ").push_bind_unseparated(owner_id);
                any = true;
            }
            if let Some(category_id) = changes.category_id {
                sets.push("category_id = ").push_bind_unseparated(category_id);
                any = true;
            }
            if let Some(title) = changes.title.filter(|s| !s.is_empty()) {
                sets.push("title = ").push_bind_unseparated(title);
                any = true;
            }
            if let Some(description) = changes.description.filter(|s| !s.is_empty()) {
                sets.push("description = ").push_bind_unseparated(description);
                any = true;
            }
            if let Some(photo) = changes.photo.filter(|s| !s.is_empty()) {
                sets.push("photo = ").push_bind_unseparated(photo);
                any = true;
            }
            if let Some(price) = changes.price {
                sets.push("price = ").push_bind_unseparated(price);
                any = true;
            }
            if let Some(stock_quantity) = changes.stock_quantity {
                sets.push("stock_quantity = ").push_bind_unseparated(stock_quantity);
                any = true;
            }
        }

        if !any {
            return None;
        }

        query.push(" WHERE id = ");
        query.push_bind(id);
        Some(query)
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_expanded(pool: &PgPool) -> Result<Vec<ProductView>, DatabaseError> {
        let products = Self::list(pool).await?;
        let mut views = Vec::with_capacity(products.len());
        for product in products {
            views.push(Self::expand(pool, product).await?);
        }
        Ok(views)
    }

    pub async fn find_expanded(pool: &PgPool, id: Uuid) -> Result<ProductView, DatabaseError> {
        let product = Self::find(pool, id).await?;
        Self::expand(pool, product).await
    }

    async fn expand(pool: &PgPool, product: Product) -> Result<ProductView, DatabaseError> {
        let owner = match product.owner_id {
            Some(owner_id) => Owner::find(pool, owner_id).await?,
            None => None,
        };
        let category = match product.category_id {
            Some(category_id) => Category::find(pool, category_id).await?,
            None => None,
        };
        let reviews = Review::ratings_for_product(pool, product.id).await?;

        Ok(ProductView {
            id: product.id,
            title: product.title,
            description: product.description,
            photo: product.photo,
            price: product.price,
            stock_quantity: product.stock_quantity,
            created_at: product.created_at,
            owner,
            category,
            reviews,
        })
    }
}
