use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use super::{fetch_page, require};
use crate::{
    dto::gifts::{CreateGiftRequest, UpdateGiftRequest},
    entity::{
        Payments,
        gifts::{ActiveModel, Column, Entity as Gifts},
    },
    error::AppResult,
    models::Gift,
    response::Meta,
    routes::params::Pagination,
};

pub async fn create<C: ConnectionTrait>(db: &C, payload: CreateGiftRequest) -> AppResult<Gift> {
    if let Some(payment_id) = payload.payment_id {
        require::<_, Payments>(db, payment_id, "Payment").await?;
    }

    let gift = ActiveModel {
        amount: Set(payload.amount),
        expires_at: Set(payload.expires_at.map(Into::into)),
        gift_type: Set(payload.gift_type),
        unit: Set(payload.unit),
        payment_id: Set(payload.payment_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::debug!(gift_id = gift.id, payment_id = ?gift.payment_id, "gift created");
    Ok(gift.into())
}

pub async fn list<C: ConnectionTrait>(db: &C, pagination: &Pagination) -> AppResult<(Vec<Gift>, Meta)> {
    let finder = Gifts::find().order_by_asc(Column::Id);
    let (rows, meta) = fetch_page(db, finder, pagination).await?;
    Ok((rows.into_iter().map(Gift::from).collect(), meta))
}

pub async fn list_for_payment<C: ConnectionTrait>(
    db: &C,
    payment_id: i32,
    pagination: &Pagination,
) -> AppResult<(Vec<Gift>, Meta)> {
    let finder = Gifts::find()
        .filter(Column::PaymentId.eq(payment_id))
        .order_by_asc(Column::Id);
    let (rows, meta) = fetch_page(db, finder, pagination).await?;
    Ok((rows.into_iter().map(Gift::from).collect(), meta))
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Gift>> {
    Ok(Gifts::find_by_id(id).one(db).await?.map(Gift::from))
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    payload: UpdateGiftRequest,
) -> AppResult<Option<Gift>> {
    let existing = match Gifts::find_by_id(id).one(db).await? {
        Some(g) => g,
        None => return Ok(None),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(amount) = payload.amount {
        active.amount = Set(amount);
    }
    if let Some(expires_at) = payload.expires_at {
        active.expires_at = Set(Some(expires_at.into()));
    }
    if let Some(gift_type) = payload.gift_type {
        active.gift_type = Set(Some(gift_type));
    }
    if let Some(unit) = payload.unit {
        active.unit = Set(unit);
    }
    if let Some(payment_id) = payload.payment_id {
        require::<_, Payments>(db, payment_id, "Payment").await?;
        active.payment_id = Set(Some(payment_id));
    }

    let gift = if active.is_changed() {
        active.update(db).await?
    } else {
        existing
    };
    Ok(Some(gift.into()))
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Gift>> {
    let existing = match Gifts::find_by_id(id).one(db).await? {
        Some(g) => g,
        None => return Ok(None),
    };

    Gifts::delete_by_id(id).exec(db).await?;
    tracing::debug!(gift_id = id, "gift deleted");
    Ok(Some(existing.into()))
}
