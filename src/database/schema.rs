use sqlx::PgPool;
use tracing::info;

use super::manager::DatabaseError;

/// Idempotent schema bootstrap, run once at startup. Statements execute one
/// at a time; CREATE TABLE IF NOT EXISTS keeps restarts safe.
const SCHEMA_STATEMENTS: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS categories (
        id UUID PRIMARY KEY,
        "type" TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS owners (
        id UUID PRIMARY KEY,
        name TEXT,
        about TEXT,
        photo TEXT
    )"#,
    r#"CREATE TABLE IF NOT EXISTS products (
        id UUID PRIMARY KEY,
        owner_id UUID,
        category_id UUID,
        title TEXT,
        description TEXT,
        photo TEXT,
        price NUMERIC(12, 2),
        stock_quantity INTEGER,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        name TEXT,
        email TEXT,
        default_address_id UUID
    )"#,
    r#"CREATE TABLE IF NOT EXISTS adresses (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL,
        country TEXT,
        full_name TEXT,
        street_adress TEXT,
        city TEXT,
        state TEXT,
        zip_code INTEGER,
        phone_number TEXT,
        delivery_instructions TEXT,
        security_code TEXT
    )"#,
    r#"CREATE TABLE IF NOT EXISTS reviews (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL,
        product_id UUID NOT NULL,
        title TEXT,
        body TEXT,
        rating INTEGER,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE IF NOT EXISTS orders (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL,
        items JSONB NOT NULL DEFAULT '[]'::jsonb,
        estimated_delivery TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE IF NOT EXISTS payments (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL,
        order_id UUID,
        amount NUMERIC(12, 2),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
];

pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema ready");
    Ok(())
}
