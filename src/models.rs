use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{
    couriers, customers, gifts, order_details, orders, payments, products, suppliers, users,
    enums::{GiftType, GiftUnit, OrderStatus, PaymentStatus},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub delivery_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub supplier_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i32,
    pub order_date: DateTime<Utc>,
    pub customer_id: i32,
    pub shipping_address: String,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDetail {
    pub id: i32,
    pub order_id: i32,
    pub product_id: Option<i32>,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Courier {
    pub id: i32,
    pub name: String,
    pub country: Option<String>,
    pub price: Option<Decimal>,
    pub order_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    pub id: i32,
    pub order_id: i32,
    pub status: PaymentStatus,
    pub amount: Decimal,
    pub payment_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Gift {
    pub id: i32,
    pub amount: Decimal,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub gift_type: Option<GiftType>,
    pub unit: GiftUnit,
    pub payment_id: Option<i32>,
}

/// Account as exposed over the API; the password hash never leaves the service layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<customers::Model> for Customer {
    fn from(model: customers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            country: model.country,
        }
    }
}

impl From<suppliers::Model> for Supplier {
    fn from(model: suppliers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            address: model.address,
            phone: model.phone,
            delivery_date: model.delivery_date.map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            supplier_id: model.supplier_id,
        }
    }
}

impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Self {
            id: model.id,
            order_date: model.order_date.with_timezone(&Utc),
            customer_id: model.customer_id,
            shipping_address: model.shipping_address,
            status: model.status,
        }
    }
}

impl From<order_details::Model> for OrderDetail {
    fn from(model: order_details::Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            product_id: model.product_id,
            quantity: model.quantity,
        }
    }
}

impl From<couriers::Model> for Courier {
    fn from(model: couriers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            country: model.country,
            price: model.price,
            order_id: model.order_id,
        }
    }
}

impl From<payments::Model> for Payment {
    fn from(model: payments::Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            status: model.status,
            amount: model.amount,
            payment_date: model.payment_date.map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl From<gifts::Model> for Gift {
    fn from(model: gifts::Model) -> Self {
        Self {
            id: model.id,
            amount: model.amount,
            expires_at: model.expires_at.map(|dt| dt.with_timezone(&Utc)),
            gift_type: model.gift_type,
            unit: model.unit,
            payment_id: model.payment_id,
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
