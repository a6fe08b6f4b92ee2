use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::fetch_page;
use crate::{
    dto::customers::{CreateCustomerRequest, UpdateCustomerRequest},
    entity::customers::{ActiveModel, Column, Entity as Customers},
    error::{AppError, AppResult},
    models::Customer,
    response::Meta,
    routes::params::Pagination,
};

const EMAIL_TAKEN: &str = "Email is already taken";

pub async fn create<C: ConnectionTrait>(
    db: &C,
    payload: CreateCustomerRequest,
) -> AppResult<Customer> {
    ensure_email_free(db, &payload.email, None).await?;

    let customer = ActiveModel {
        name: Set(payload.name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        country: Set(payload.country),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| AppError::from_unique(e, EMAIL_TAKEN))?;

    tracing::debug!(customer_id = customer.id, "customer created");
    Ok(customer.into())
}

pub async fn list<C: ConnectionTrait>(
    db: &C,
    pagination: &Pagination,
) -> AppResult<(Vec<Customer>, Meta)> {
    let finder = Customers::find().order_by_asc(Column::Id);
    let (rows, meta) = fetch_page(db, finder, pagination).await?;
    Ok((rows.into_iter().map(Customer::from).collect(), meta))
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Customer>> {
    Ok(Customers::find_by_id(id).one(db).await?.map(Customer::from))
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    payload: UpdateCustomerRequest,
) -> AppResult<Option<Customer>> {
    let existing = match Customers::find_by_id(id).one(db).await? {
        Some(c) => c,
        None => return Ok(None),
    };

    if let Some(email) = payload.email.as_deref() {
        ensure_email_free(db, email, Some(id)).await?;
    }

    let mut active: ActiveModel = existing.clone().into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(email) = payload.email {
        active.email = Set(email);
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(country) = payload.country {
        active.country = Set(Some(country));
    }

    let customer = if active.is_changed() {
        active
            .update(db)
            .await
            .map_err(|e| AppError::from_unique(e, EMAIL_TAKEN))?
    } else {
        existing
    };
    Ok(Some(customer.into()))
}

/// Removes the customer; their orders and everything hanging off them go with it.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Customer>> {
    let existing = match Customers::find_by_id(id).one(db).await? {
        Some(c) => c,
        None => return Ok(None),
    };

    Customers::delete_by_id(id).exec(db).await?;
    tracing::debug!(customer_id = id, "customer deleted");
    Ok(Some(existing.into()))
}

async fn ensure_email_free<C: ConnectionTrait>(
    db: &C,
    email: &str,
    except: Option<i32>,
) -> AppResult<()> {
    let mut condition = Condition::all().add(Column::Email.eq(email));
    if let Some(id) = except {
        condition = condition.add(Column::Id.ne(id));
    }

    let taken = Customers::find().filter(condition).one(db).await?;
    if taken.is_some() {
        tracing::warn!(email, "customer email already registered");
        return Err(AppError::BadRequest(EMAIL_TAKEN.into()));
    }
    Ok(())
}
