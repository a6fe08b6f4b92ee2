use anyhow::Context;
use rust_decimal::Decimal;
use shop_db_api::{
    db::{create_orm_conn, run_migrations},
    services::auth_service::hash_password,
};
use sqlx::PgPool;

const SUPPLIERS: &[(&str, &str, &str)] = &[
    ("Baltic Ceramics", "Brivibas iela 1, Riga", "+371 2000 0001"),
    ("Nordic Paper Co", "Storgatan 5, Stockholm", "+46 8 000 0002"),
];

// (name, price in cents, supplier name)
const PRODUCTS: &[(&str, i64, &str)] = &[
    ("Coffee Mug", 1299, "Baltic Ceramics"),
    ("Tea Pot", 3450, "Baltic Ceramics"),
    ("Notebook A5", 499, "Nordic Paper Co"),
    ("Sketch Pad", 899, "Nordic Paper Co"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter("info").init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let orm = create_orm_conn(&database_url).await?;
    run_migrations(&orm).await?;
    let pool = orm.get_postgres_connection_pool();

    let admin_id = ensure_user(pool, "admin", "admin@example.com", "admin123").await?;
    for (name, address, phone) in SUPPLIERS {
        ensure_supplier(pool, name, address, phone).await?;
    }
    for (name, cents, supplier) in PRODUCTS {
        ensure_product(pool, name, Decimal::new(*cents, 2), supplier).await?;
    }
    let customer_id = ensure_customer(pool, "Jane Doe", "jane@example.com").await?;

    println!("Seed completed. Admin ID: {admin_id}, Customer ID: {customer_id}");
    Ok(())
}

async fn ensure_user(pool: &PgPool, username: &str, email: &str, password: &str) -> anyhow::Result<i32> {
    let password_hash = hash_password(password).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO users (username, email, password_hash)
        VALUES ($1, $2, $3)
        ON CONFLICT (username) DO UPDATE SET email = users.email
        RETURNING id
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    println!("Ensured user {username}");
    Ok(id)
}

async fn ensure_supplier(pool: &PgPool, name: &str, address: &str, phone: &str) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO suppliers (name, address, phone)
        SELECT $1, $2, $3
        WHERE NOT EXISTS (SELECT 1 FROM suppliers WHERE name = $1)
        "#,
    )
    .bind(name)
    .bind(address)
    .bind(phone)
    .execute(pool)
    .await?;
    Ok(())
}

async fn ensure_product(pool: &PgPool, name: &str, price: Decimal, supplier: &str) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO products (name, price, supplier_id)
        SELECT $1, $2, (SELECT id FROM suppliers WHERE name = $3 ORDER BY id LIMIT 1)
        WHERE NOT EXISTS (SELECT 1 FROM products WHERE name = $1)
        "#,
    )
    .bind(name)
    .bind(price)
    .bind(supplier)
    .execute(pool)
    .await?;
    Ok(())
}

async fn ensure_customer(pool: &PgPool, name: &str, email: &str) -> anyhow::Result<i32> {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO customers (name, email, country)
        VALUES ($1, $2, 'Latvia')
        ON CONFLICT (email) DO UPDATE SET name = customers.name
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(email)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
