use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{fetch_page, require};
use crate::{
    dto::orders::{CreateOrderRequest, UpdateOrderRequest},
    entity::{
        Customers,
        orders::{ActiveModel, Column, Entity as Orders},
    },
    error::AppResult,
    models::Order,
    response::Meta,
    routes::params::Pagination,
};

/// Creates an order for an existing customer. Missing date means now, missing status means `Pending`.
pub async fn create<C: ConnectionTrait>(db: &C, payload: CreateOrderRequest) -> AppResult<Order> {
    require::<_, Customers>(db, payload.customer_id, "Customer").await?;

    let order_date = payload.order_date.unwrap_or_else(Utc::now);
    let order = ActiveModel {
        order_date: Set(order_date.into()),
        customer_id: Set(payload.customer_id),
        shipping_address: Set(payload.shipping_address),
        status: Set(payload.status.unwrap_or_default()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::debug!(order_id = order.id, customer_id = order.customer_id, "order created");
    Ok(order.into())
}

pub async fn list<C: ConnectionTrait>(
    db: &C,
    pagination: &Pagination,
) -> AppResult<(Vec<Order>, Meta)> {
    let finder = Orders::find().order_by_asc(Column::Id);
    let (rows, meta) = fetch_page(db, finder, pagination).await?;
    Ok((rows.into_iter().map(Order::from).collect(), meta))
}

pub async fn list_for_customer<C: ConnectionTrait>(
    db: &C,
    customer_id: i32,
    pagination: &Pagination,
) -> AppResult<(Vec<Order>, Meta)> {
    let finder = Orders::find()
        .filter(Column::CustomerId.eq(customer_id))
        .order_by_asc(Column::Id);
    let (rows, meta) = fetch_page(db, finder, pagination).await?;
    Ok((rows.into_iter().map(Order::from).collect(), meta))
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Order>> {
    Ok(Orders::find_by_id(id).one(db).await?.map(Order::from))
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    payload: UpdateOrderRequest,
) -> AppResult<Option<Order>> {
    let existing = match Orders::find_by_id(id).one(db).await? {
        Some(o) => o,
        None => return Ok(None),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(customer_id) = payload.customer_id {
        require::<_, Customers>(db, customer_id, "Customer").await?;
        active.customer_id = Set(customer_id);
    }
    if let Some(order_date) = payload.order_date {
        active.order_date = Set(order_date.into());
    }
    if let Some(shipping_address) = payload.shipping_address {
        active.shipping_address = Set(shipping_address);
    }
    if let Some(status) = payload.status {
        active.status = Set(status);
    }

    let order = if active.is_changed() {
        active.update(db).await?
    } else {
        existing
    };
    Ok(Some(order.into()))
}

/// Removes the order together with its lines, courier and payment.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Order>> {
    let existing = match Orders::find_by_id(id).one(db).await? {
        Some(o) => o,
        None => return Ok(None),
    };

    Orders::delete_by_id(id).exec(db).await?;
    tracing::debug!(order_id = id, "order deleted");
    Ok(Some(existing.into()))
}
