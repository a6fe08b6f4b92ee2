use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};

use super::{
    fetch_page,
    ownership::{self, DetailPath},
    require,
};
use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    entity::{
        Suppliers, order_details,
        products::{ActiveModel, Column, Entity as Products},
    },
    error::AppResult,
    models::Product,
    response::Meta,
    routes::params::Pagination,
};

pub async fn create<C: ConnectionTrait>(
    db: &C,
    payload: CreateProductRequest,
) -> AppResult<Product> {
    if let Some(supplier_id) = payload.supplier_id {
        require::<_, Suppliers>(db, supplier_id, "Supplier").await?;
    }

    let product = ActiveModel {
        name: Set(payload.name),
        price: Set(payload.price),
        supplier_id: Set(payload.supplier_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::debug!(product_id = product.id, "product created");
    Ok(product.into())
}

/// Creates a product and points the order line at it in one transaction.
pub async fn create_for_line(
    db: &DatabaseConnection,
    path: DetailPath,
    payload: CreateProductRequest,
) -> AppResult<Product> {
    let txn = db.begin().await?;
    let detail = ownership::order_detail(&txn, path).await?;
    let product = create(&txn, payload).await?;

    let mut line: order_details::ActiveModel = detail.into();
    line.product_id = Set(Some(product.id));
    line.update(&txn).await?;

    txn.commit().await?;
    tracing::debug!(product_id = product.id, order_detail_id = path.detail_id, "product attached to line");
    Ok(product)
}

pub async fn list<C: ConnectionTrait>(
    db: &C,
    pagination: &Pagination,
) -> AppResult<(Vec<Product>, Meta)> {
    let finder = Products::find().order_by_asc(Column::Id);
    let (rows, meta) = fetch_page(db, finder, pagination).await?;
    Ok((rows.into_iter().map(Product::from).collect(), meta))
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Product>> {
    Ok(Products::find_by_id(id).one(db).await?.map(Product::from))
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<Option<Product>> {
    let existing = match Products::find_by_id(id).one(db).await? {
        Some(p) => p,
        None => return Ok(None),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(supplier_id) = payload.supplier_id {
        require::<_, Suppliers>(db, supplier_id, "Supplier").await?;
        active.supplier_id = Set(Some(supplier_id));
    }

    let product = if active.is_changed() {
        active.update(db).await?
    } else {
        existing
    };
    Ok(Some(product.into()))
}

/// Order lines that pointed at the product are left without one.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<Product>> {
    let existing = match Products::find_by_id(id).one(db).await? {
        Some(p) => p,
        None => return Ok(None),
    };

    Products::delete_by_id(id).exec(db).await?;
    tracing::debug!(product_id = id, "product deleted");
    Ok(Some(existing.into()))
}
