use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, TransactionTrait};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{order_detail_service, order_service, require};
use crate::{
    dto::{order_details::CreateOrderDetailRequest, orders::CreateOrderRequest},
    entity::{Customers, enums::OrderStatus, products},
    error::{AppError, AppResult},
    models::{Order, OrderDetail},
};

const DEMO_ADDRESSES: &[&str] = &[
    "12 Harbour Street, Riga",
    "221B Baker Street, London",
    "Karl-Marx-Allee 90, Berlin",
    "Rue de Rivoli 75, Paris",
    "Via Roma 14, Milano",
    "Nowy Swiat 21, Warszawa",
];

/// One row of `v_order_summary`.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct OrderSummaryRow {
    pub order_id: i32,
    pub order_date: DateTime<Utc>,
    pub status: String,
    pub customer_id: i32,
    pub customer_name: String,
    pub line_count: i64,
    pub total_quantity: i64,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RandomOrder {
    pub order: Order,
    pub detail: OrderDetail,
}

pub async fn orders_summary(db: &DatabaseConnection) -> AppResult<Vec<OrderSummaryRow>> {
    let pool = db.get_postgres_connection_pool();
    let rows = sqlx::query_as::<_, OrderSummaryRow>(
        "SELECT order_id, order_date, status, customer_id, customer_name, \
         line_count, total_quantity, total_amount \
         FROM v_order_summary ORDER BY order_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Places a one-line demo order for an existing customer inside a single transaction.
pub async fn create_random_order(db: &DatabaseConnection, customer_id: i32) -> AppResult<RandomOrder> {
    let txn = db.begin().await?;

    require::<_, Customers>(&txn, customer_id, "Customer").await?;

    let product_count = products::Entity::find().count(&txn).await?;
    if product_count == 0 {
        tracing::warn!(customer_id, "random order requested with an empty catalogue");
        return Err(AppError::BadRequest("No products available".into()));
    }

    let (offset, address, quantity) = {
        let mut rng = rand::rng();
        let address = DEMO_ADDRESSES[rng.random_range(0..DEMO_ADDRESSES.len())];
        (rng.random_range(0..product_count), address, rng.random_range(1..=5))
    };

    let product = products::Entity::find()
        .order_by_asc(products::Column::Id)
        .offset(offset)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("product vanished while picking")))?;

    let order = order_service::create(
        &txn,
        CreateOrderRequest {
            customer_id,
            order_date: None,
            shipping_address: address.to_string(),
            status: Some(OrderStatus::Pending),
        },
    )
    .await?;
    let detail = order_detail_service::create(
        &txn,
        CreateOrderDetailRequest {
            order_id: order.id,
            product_id: product.id,
            quantity,
        },
    )
    .await?;

    txn.commit().await?;
    tracing::info!(order_id = order.id, customer_id, product_id = product.id, quantity, "random order created");
    Ok(RandomOrder { order, detail })
}
