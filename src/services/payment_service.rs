use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{fetch_page, require};
use crate::{
    dto::payments::{CreatePaymentRequest, UpdatePaymentRequest},
    entity::{
        Orders,
        payments::{ActiveModel, Column, Entity as Payments},
    },
    error::{AppError, AppResult},
    models::Payment,
    response::Meta,
    routes::params::Pagination,
};

pub async fn create<C: ConnectionTrait>(db: &C, payload: CreatePaymentRequest) -> AppResult<Payment> {
    let order_id = payload.order_id;
    require::<_, Orders>(db, order_id, "Order").await?;
    ensure_order_unpaid(db, order_id).await?;

    let payment = ActiveModel {
        order_id: Set(order_id),
        status: Set(payload.status.unwrap_or_default()),
        amount: Set(payload.amount),
        payment_date: Set(payload.payment_date.map(Into::into)),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| AppError::from_unique(e, format!("Order {order_id} already has a payment")))?;

    tracing::debug!(payment_id = payment.id, order_id = payment.order_id, "payment created");
    Ok(payment.into())
}

pub async fn list<C: ConnectionTrait>(
    db: &C,
    pagination: &Pagination,
) -> AppResult<(Vec<Payment>, Meta)> {
    let finder = Payments::find().order_by_asc(Column::Id);
    let (rows, meta) = fetch_page(db, finder, pagination).await?;
    Ok((rows.into_iter().map(Payment::from).collect(), meta))
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Payment>> {
    Ok(Payments::find_by_id(id).one(db).await?.map(Payment::from))
}

pub async fn find_for_order<C: ConnectionTrait>(db: &C, order_id: i32) -> AppResult<Option<Payment>> {
    let payment = Payments::find()
        .filter(Column::OrderId.eq(order_id))
        .one(db)
        .await?;
    Ok(payment.map(Payment::from))
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    payload: UpdatePaymentRequest,
) -> AppResult<Option<Payment>> {
    let existing = match Payments::find_by_id(id).one(db).await? {
        Some(p) => p,
        None => return Ok(None),
    };

    let order_id = payload.order_id.unwrap_or(existing.order_id);
    let mut active: ActiveModel = existing.clone().into();
    if let Some(order_id) = payload.order_id.filter(|o| *o != existing.order_id) {
        require::<_, Orders>(db, order_id, "Order").await?;
        ensure_order_unpaid(db, order_id).await?;
        active.order_id = Set(order_id);
    }
    if let Some(status) = payload.status {
        active.status = Set(status);
    }
    if let Some(amount) = payload.amount {
        active.amount = Set(amount);
    }
    if let Some(payment_date) = payload.payment_date {
        active.payment_date = Set(Some(payment_date.into()));
    }

    let payment = if active.is_changed() {
        active
            .update(db)
            .await
            .map_err(|e| AppError::from_unique(e, format!("Order {order_id} already has a payment")))?
    } else {
        existing
    };
    Ok(Some(payment.into()))
}

/// Gifts attached to the payment stay, detached.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Payment>> {
    let existing = match Payments::find_by_id(id).one(db).await? {
        Some(p) => p,
        None => return Ok(None),
    };

    Payments::delete_by_id(id).exec(db).await?;
    tracing::debug!(payment_id = id, "payment deleted");
    Ok(Some(existing.into()))
}

async fn ensure_order_unpaid<C: ConnectionTrait>(db: &C, order_id: i32) -> AppResult<()> {
    if find_for_order(db, order_id).await?.is_some() {
        tracing::warn!(order_id, "order already has a payment");
        return Err(AppError::BadRequest(format!(
            "Order {order_id} already has a payment"
        )));
    }
    Ok(())
}
