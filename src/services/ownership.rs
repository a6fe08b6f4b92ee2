//! Ancestor-chain checks for the `/customer/{customer_id}/orders/...` routes.
//!
//! Every level loads its own record, then verifies the record's foreign key
//! against the parent named in the path. A missing record and a record that
//! belongs to a different parent are both reported as not found, so nested
//! handlers never write through a broken chain.

use sea_orm::ConnectionTrait;
use serde::Deserialize;
use utoipa::IntoParams;

use super::require;
use crate::{
    entity::{
        Couriers, Customers, Gifts, OrderDetails, Orders, Payments, Products, Suppliers,
        couriers, customers, gifts, order_details, orders, payments, products, suppliers,
    },
    error::{AppError, AppResult},
};

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct CustomerPath {
    pub customer_id: i32,
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct OrderPath {
    pub customer_id: i32,
    pub order_id: i32,
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct PaymentPath {
    pub customer_id: i32,
    pub order_id: i32,
    pub payment_id: i32,
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct GiftPath {
    pub customer_id: i32,
    pub order_id: i32,
    pub payment_id: i32,
    pub gift_id: i32,
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct CourierPath {
    pub customer_id: i32,
    pub order_id: i32,
    pub courier_id: i32,
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct DetailPath {
    pub customer_id: i32,
    pub order_id: i32,
    pub detail_id: i32,
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct ProductPath {
    pub customer_id: i32,
    pub order_id: i32,
    pub detail_id: i32,
    pub product_id: i32,
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct SupplierPath {
    pub customer_id: i32,
    pub order_id: i32,
    pub detail_id: i32,
    pub product_id: i32,
    pub supplier_id: i32,
}

impl OrderPath {
    pub fn customer(&self) -> CustomerPath {
        CustomerPath {
            customer_id: self.customer_id,
        }
    }
}

impl PaymentPath {
    pub fn order(&self) -> OrderPath {
        OrderPath {
            customer_id: self.customer_id,
            order_id: self.order_id,
        }
    }
}

impl GiftPath {
    pub fn payment(&self) -> PaymentPath {
        PaymentPath {
            customer_id: self.customer_id,
            order_id: self.order_id,
            payment_id: self.payment_id,
        }
    }
}

impl CourierPath {
    pub fn order(&self) -> OrderPath {
        OrderPath {
            customer_id: self.customer_id,
            order_id: self.order_id,
        }
    }
}

impl DetailPath {
    pub fn order(&self) -> OrderPath {
        OrderPath {
            customer_id: self.customer_id,
            order_id: self.order_id,
        }
    }
}

impl ProductPath {
    pub fn detail(&self) -> DetailPath {
        DetailPath {
            customer_id: self.customer_id,
            order_id: self.order_id,
            detail_id: self.detail_id,
        }
    }
}

impl SupplierPath {
    pub fn product(&self) -> ProductPath {
        ProductPath {
            customer_id: self.customer_id,
            order_id: self.order_id,
            detail_id: self.detail_id,
            product_id: self.product_id,
        }
    }
}

fn mismatch(child: &str, child_id: i32, parent: &str, parent_id: i32) -> AppError {
    tracing::warn!(child, child_id, parent, parent_id, "ownership mismatch");
    AppError::not_found(format!("{child} {child_id} for {parent} {parent_id}"))
}

pub async fn customer<C: ConnectionTrait>(db: &C, path: CustomerPath) -> AppResult<customers::Model> {
    require::<_, Customers>(db, path.customer_id, "Customer").await
}

pub async fn order<C: ConnectionTrait>(db: &C, path: OrderPath) -> AppResult<orders::Model> {
    customer(db, path.customer()).await?;
    let order = require::<_, Orders>(db, path.order_id, "Order").await?;
    if order.customer_id != path.customer_id {
        return Err(mismatch("Order", order.id, "customer", path.customer_id));
    }
    Ok(order)
}

pub async fn payment<C: ConnectionTrait>(db: &C, path: PaymentPath) -> AppResult<payments::Model> {
    order(db, path.order()).await?;
    let payment = require::<_, Payments>(db, path.payment_id, "Payment").await?;
    if payment.order_id != path.order_id {
        return Err(mismatch("Payment", payment.id, "order", path.order_id));
    }
    Ok(payment)
}

pub async fn gift<C: ConnectionTrait>(db: &C, path: GiftPath) -> AppResult<gifts::Model> {
    payment(db, path.payment()).await?;
    let gift = require::<_, Gifts>(db, path.gift_id, "Gift").await?;
    if gift.payment_id != Some(path.payment_id) {
        return Err(mismatch("Gift", gift.id, "payment", path.payment_id));
    }
    Ok(gift)
}

pub async fn courier<C: ConnectionTrait>(db: &C, path: CourierPath) -> AppResult<couriers::Model> {
    order(db, path.order()).await?;
    let courier = require::<_, Couriers>(db, path.courier_id, "Courier").await?;
    if courier.order_id != path.order_id {
        return Err(mismatch("Courier", courier.id, "order", path.order_id));
    }
    Ok(courier)
}

pub async fn order_detail<C: ConnectionTrait>(
    db: &C,
    path: DetailPath,
) -> AppResult<order_details::Model> {
    order(db, path.order()).await?;
    let detail = require::<_, OrderDetails>(db, path.detail_id, "Order detail").await?;
    if detail.order_id != path.order_id {
        return Err(mismatch("Order detail", detail.id, "order", path.order_id));
    }
    Ok(detail)
}

/// The product the order line currently points at.
pub async fn attached_product<C: ConnectionTrait>(
    db: &C,
    path: DetailPath,
) -> AppResult<products::Model> {
    let detail = order_detail(db, path).await?;
    let product_id = detail
        .product_id
        .ok_or_else(|| AppError::not_found(format!("Product for order detail {}", detail.id)))?;
    require::<_, Products>(db, product_id, "Product").await
}

pub async fn product<C: ConnectionTrait>(db: &C, path: ProductPath) -> AppResult<products::Model> {
    let detail = order_detail(db, path.detail()).await?;
    if detail.product_id != Some(path.product_id) {
        return Err(mismatch("Product", path.product_id, "order detail", detail.id));
    }
    require::<_, Products>(db, path.product_id, "Product").await
}

/// The supplier the product currently points at.
pub async fn attached_supplier<C: ConnectionTrait>(
    db: &C,
    path: ProductPath,
) -> AppResult<suppliers::Model> {
    let product = product(db, path).await?;
    let supplier_id = product
        .supplier_id
        .ok_or_else(|| AppError::not_found(format!("Supplier for product {}", product.id)))?;
    require::<_, Suppliers>(db, supplier_id, "Supplier").await
}

pub async fn supplier<C: ConnectionTrait>(db: &C, path: SupplierPath) -> AppResult<suppliers::Model> {
    let product = product(db, path.product()).await?;
    if product.supplier_id != Some(path.supplier_id) {
        return Err(mismatch("Supplier", path.supplier_id, "product", product.id));
    }
    require::<_, Suppliers>(db, path.supplier_id, "Supplier").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deeper_paths_narrow_to_their_parents() {
        let path = SupplierPath {
            customer_id: 1,
            order_id: 10,
            detail_id: 20,
            product_id: 30,
            supplier_id: 40,
        };
        let product = path.product();
        assert_eq!(product.product_id, 30);
        let detail = product.detail();
        assert_eq!(detail.detail_id, 20);
        let order = detail.order();
        assert_eq!((order.customer_id, order.order_id), (1, 10));
        assert_eq!(order.customer().customer_id, 1);
    }

    #[test]
    fn mismatch_reads_as_not_found() {
        let err = mismatch("Order", 10, "customer", 2);
        assert_eq!(err.to_string(), "Order 10 for customer 2 not found");
    }
}
