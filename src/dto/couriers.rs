use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::positive_amount;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCourierRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(length(min = 2, max = 50))]
    pub country: Option<String>,
    #[validate(custom(function = "positive_amount"))]
    pub price: Option<Decimal>,
    pub order_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCourierRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 2, max = 50))]
    pub country: Option<String>,
    #[validate(custom(function = "positive_amount"))]
    pub price: Option<Decimal>,
    pub order_id: Option<i32>,
}

/// Courier body under `/customer/{id}/orders/{id}/courier`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct OrderCourierRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(length(min = 2, max = 50))]
    pub country: Option<String>,
    #[validate(custom(function = "positive_amount"))]
    pub price: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct OrderCourierUpdate {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 2, max = 50))]
    pub country: Option<String>,
    #[validate(custom(function = "positive_amount"))]
    pub price: Option<Decimal>,
}

impl OrderCourierRequest {
    pub fn for_order(self, order_id: i32) -> CreateCourierRequest {
        CreateCourierRequest {
            name: self.name,
            country: self.country,
            price: self.price,
            order_id,
        }
    }
}

impl From<OrderCourierUpdate> for UpdateCourierRequest {
    fn from(update: OrderCourierUpdate) -> Self {
        Self {
            name: update.name,
            country: update.country,
            price: update.price,
            order_id: None,
        }
    }
}
