use sea_orm::{ConnectionTrait, EntityTrait, FromQueryResult, PaginatorTrait, PrimaryKeyTrait, QuerySelect, Select};

use crate::{
    error::{AppError, AppResult},
    response::Meta,
    routes::params::Pagination,
};

pub mod analytics_service;
pub mod auth_service;
pub mod courier_service;
pub mod customer_service;
pub mod gift_service;
pub mod order_detail_service;
pub mod order_service;
pub mod ownership;
pub mod payment_service;
pub mod product_service;
pub mod supplier_service;

/// Load a record by id or fail with a not-found naming `label` and `id`.
pub(crate) async fn require<C, E>(db: &C, id: i32, label: &str) -> AppResult<E::Model>
where
    C: ConnectionTrait,
    E: EntityTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    E::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("{label} {id}")))
}

/// Run `select` either whole or windowed by `pagination`, returning the rows and paging meta.
pub(crate) async fn fetch_page<C, E>(
    db: &C,
    select: Select<E>,
    pagination: &Pagination,
) -> AppResult<(Vec<E::Model>, Meta)>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
{
    let total = select.clone().count(db).await? as i64;
    match pagination.window() {
        Some((page, per_page, offset)) => {
            let items = select
                .limit(per_page as u64)
                .offset(offset as u64)
                .all(db)
                .await?;
            Ok((items, Meta::new(page, per_page, total)))
        }
        None => {
            let items = select.all(db).await?;
            Ok((items, Meta::unpaged(total)))
        }
    }
}
