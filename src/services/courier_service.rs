use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{fetch_page, require};
use crate::{
    dto::couriers::{CreateCourierRequest, UpdateCourierRequest},
    entity::{
        Orders,
        couriers::{ActiveModel, Column, Entity as Couriers},
    },
    error::{AppError, AppResult},
    models::Courier,
    response::Meta,
    routes::params::Pagination,
};

pub async fn create<C: ConnectionTrait>(db: &C, payload: CreateCourierRequest) -> AppResult<Courier> {
    let order_id = payload.order_id;
    require::<_, Orders>(db, order_id, "Order").await?;
    ensure_order_has_no_courier(db, order_id).await?;

    let courier = ActiveModel {
        name: Set(payload.name),
        country: Set(payload.country),
        price: Set(payload.price),
        order_id: Set(order_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| AppError::from_unique(e, format!("Order {order_id} already has a courier")))?;

    tracing::debug!(courier_id = courier.id, order_id = courier.order_id, "courier created");
    Ok(courier.into())
}

pub async fn list<C: ConnectionTrait>(
    db: &C,
    pagination: &Pagination,
) -> AppResult<(Vec<Courier>, Meta)> {
    let finder = Couriers::find().order_by_asc(Column::Id);
    let (rows, meta) = fetch_page(db, finder, pagination).await?;
    Ok((rows.into_iter().map(Courier::from).collect(), meta))
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Courier>> {
    Ok(Couriers::find_by_id(id).one(db).await?.map(Courier::from))
}

pub async fn find_for_order<C: ConnectionTrait>(db: &C, order_id: i32) -> AppResult<Option<Courier>> {
    let courier = Couriers::find()
        .filter(Column::OrderId.eq(order_id))
        .one(db)
        .await?;
    Ok(courier.map(Courier::from))
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    payload: UpdateCourierRequest,
) -> AppResult<Option<Courier>> {
    let existing = match Couriers::find_by_id(id).one(db).await? {
        Some(c) => c,
        None => return Ok(None),
    };

    let order_id = payload.order_id.unwrap_or(existing.order_id);
    let mut active: ActiveModel = existing.clone().into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(country) = payload.country {
        active.country = Set(Some(country));
    }
    if let Some(price) = payload.price {
        active.price = Set(Some(price));
    }
    if let Some(order_id) = payload.order_id.filter(|o| *o != existing.order_id) {
        require::<_, Orders>(db, order_id, "Order").await?;
        ensure_order_has_no_courier(db, order_id).await?;
        active.order_id = Set(order_id);
    }

    let courier = if active.is_changed() {
        active
            .update(db)
            .await
            .map_err(|e| AppError::from_unique(e, format!("Order {order_id} already has a courier")))?
    } else {
        existing
    };
    Ok(Some(courier.into()))
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Courier>> {
    let existing = match Couriers::find_by_id(id).one(db).await? {
        Some(c) => c,
        None => return Ok(None),
    };

    Couriers::delete_by_id(id).exec(db).await?;
    tracing::debug!(courier_id = id, "courier deleted");
    Ok(Some(existing.into()))
}

async fn ensure_order_has_no_courier<C: ConnectionTrait>(db: &C, order_id: i32) -> AppResult<()> {
    if find_for_order(db, order_id).await?.is_some() {
        tracing::warn!(order_id, "order already has a courier");
        return Err(AppError::BadRequest(format!(
            "Order {order_id} already has a courier"
        )));
    }
    Ok(())
}
