use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::entity::enums::OrderStatus;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_id: i32,
    pub order_date: Option<DateTime<Utc>>,
    #[validate(length(min = 5, max = 200))]
    pub shipping_address: String,
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    pub customer_id: Option<i32>,
    pub order_date: Option<DateTime<Utc>>,
    #[validate(length(min = 5, max = 200))]
    pub shipping_address: Option<String>,
    pub status: Option<OrderStatus>,
}

/// Order body under `/customer/{id}/orders`; the customer comes from the path.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CustomerOrderRequest {
    pub order_date: Option<DateTime<Utc>>,
    #[validate(length(min = 5, max = 200))]
    pub shipping_address: String,
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CustomerOrderUpdate {
    pub order_date: Option<DateTime<Utc>>,
    #[validate(length(min = 5, max = 200))]
    pub shipping_address: Option<String>,
    pub status: Option<OrderStatus>,
}

impl CustomerOrderRequest {
    pub fn for_customer(self, customer_id: i32) -> CreateOrderRequest {
        CreateOrderRequest {
            customer_id,
            order_date: self.order_date,
            shipping_address: self.shipping_address,
            status: self.status,
        }
    }
}

impl From<CustomerOrderUpdate> for UpdateOrderRequest {
    fn from(update: CustomerOrderUpdate) -> Self {
        Self {
            customer_id: None,
            order_date: update.order_date,
            shipping_address: update.shipping_address,
            status: update.status,
        }
    }
}
