use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};

use super::{
    fetch_page,
    ownership::{self, ProductPath},
};
use crate::{
    dto::suppliers::{CreateSupplierRequest, UpdateSupplierRequest},
    entity::{
        products,
        suppliers::{ActiveModel, Column, Entity as Suppliers},
    },
    error::AppResult,
    models::Supplier,
    response::Meta,
    routes::params::Pagination,
};

pub async fn create<C: ConnectionTrait>(
    db: &C,
    payload: CreateSupplierRequest,
) -> AppResult<Supplier> {
    let supplier = ActiveModel {
        name: Set(payload.name),
        address: Set(payload.address),
        phone: Set(payload.phone),
        delivery_date: Set(payload.delivery_date.map(Into::into)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::debug!(supplier_id = supplier.id, "supplier created");
    Ok(supplier.into())
}

/// Creates a supplier and makes it the product's supplier in one transaction.
pub async fn create_for_product(
    db: &DatabaseConnection,
    path: ProductPath,
    payload: CreateSupplierRequest,
) -> AppResult<Supplier> {
    let txn = db.begin().await?;
    let product = ownership::product(&txn, path).await?;
    let supplier = create(&txn, payload).await?;

    let mut product: products::ActiveModel = product.into();
    product.supplier_id = Set(Some(supplier.id));
    product.update(&txn).await?;

    txn.commit().await?;
    tracing::debug!(supplier_id = supplier.id, product_id = path.product_id, "supplier attached to product");
    Ok(supplier)
}

pub async fn list<C: ConnectionTrait>(
    db: &C,
    pagination: &Pagination,
) -> AppResult<(Vec<Supplier>, Meta)> {
    let finder = Suppliers::find().order_by_asc(Column::Id);
    let (rows, meta) = fetch_page(db, finder, pagination).await?;
    Ok((rows.into_iter().map(Supplier::from).collect(), meta))
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Supplier>> {
    Ok(Suppliers::find_by_id(id).one(db).await?.map(Supplier::from))
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    payload: UpdateSupplierRequest,
) -> AppResult<Option<Supplier>> {
    let existing = match Suppliers::find_by_id(id).one(db).await? {
        Some(s) => s,
        None => return Ok(None),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(address) = payload.address {
        active.address = Set(Some(address));
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(delivery_date) = payload.delivery_date {
        active.delivery_date = Set(Some(delivery_date.into()));
    }

    let supplier = if active.is_changed() {
        active.update(db).await?
    } else {
        existing
    };
    Ok(Some(supplier.into()))
}

/// Products of a deleted supplier keep existing with no supplier.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Supplier>> {
    let existing = match Suppliers::find_by_id(id).one(db).await? {
        Some(s) => s,
        None => return Ok(None),
    };

    Suppliers::delete_by_id(id).exec(db).await?;
    tracing::debug!(supplier_id = id, "supplier deleted");
    Ok(Some(existing.into()))
}
