use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{fetch_page, require};
use crate::{
    dto::order_details::{CreateOrderDetailRequest, UpdateOrderDetailRequest},
    entity::{
        Orders, Products,
        order_details::{ActiveModel, Column, Entity as OrderDetails},
    },
    error::AppResult,
    models::OrderDetail,
    response::Meta,
    routes::params::Pagination,
};

pub async fn create<C: ConnectionTrait>(
    db: &C,
    payload: CreateOrderDetailRequest,
) -> AppResult<OrderDetail> {
    require::<_, Orders>(db, payload.order_id, "Order").await?;
    require::<_, Products>(db, payload.product_id, "Product").await?;

    let detail = ActiveModel {
        order_id: Set(payload.order_id),
        product_id: Set(Some(payload.product_id)),
        quantity: Set(payload.quantity),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::debug!(order_detail_id = detail.id, order_id = detail.order_id, "order line created");
    Ok(detail.into())
}

pub async fn list<C: ConnectionTrait>(
    db: &C,
    pagination: &Pagination,
) -> AppResult<(Vec<OrderDetail>, Meta)> {
    let finder = OrderDetails::find().order_by_asc(Column::Id);
    let (rows, meta) = fetch_page(db, finder, pagination).await?;
    Ok((rows.into_iter().map(OrderDetail::from).collect(), meta))
}

pub async fn list_for_order<C: ConnectionTrait>(
    db: &C,
    order_id: i32,
    pagination: &Pagination,
) -> AppResult<(Vec<OrderDetail>, Meta)> {
    let finder = OrderDetails::find()
        .filter(Column::OrderId.eq(order_id))
        .order_by_asc(Column::Id);
    let (rows, meta) = fetch_page(db, finder, pagination).await?;
    Ok((rows.into_iter().map(OrderDetail::from).collect(), meta))
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<OrderDetail>> {
    Ok(OrderDetails::find_by_id(id).one(db).await?.map(OrderDetail::from))
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    payload: UpdateOrderDetailRequest,
) -> AppResult<Option<OrderDetail>> {
    let existing = match OrderDetails::find_by_id(id).one(db).await? {
        Some(d) => d,
        None => return Ok(None),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(order_id) = payload.order_id {
        require::<_, Orders>(db, order_id, "Order").await?;
        active.order_id = Set(order_id);
    }
    if let Some(product_id) = payload.product_id {
        require::<_, Products>(db, product_id, "Product").await?;
        active.product_id = Set(Some(product_id));
    }
    if let Some(quantity) = payload.quantity {
        active.quantity = Set(quantity);
    }

    let detail = if active.is_changed() {
        active.update(db).await?
    } else {
        existing
    };
    Ok(Some(detail.into()))
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<OrderDetail>> {
    let existing = match OrderDetails::find_by_id(id).one(db).await? {
        Some(d) => d,
        None => return Ok(None),
    };

    OrderDetails::delete_by_id(id).exec(db).await?;
    tracing::debug!(order_detail_id = id, "order line deleted");
    Ok(Some(existing.into()))
}
