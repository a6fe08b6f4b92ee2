use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::positive_amount;
use crate::entity::enums::PaymentStatus;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentRequest {
    pub order_id: i32,
    pub status: Option<PaymentStatus>,
    #[validate(custom(function = "positive_amount"))]
    pub amount: Decimal,
    pub payment_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePaymentRequest {
    pub order_id: Option<i32>,
    pub status: Option<PaymentStatus>,
    #[validate(custom(function = "positive_amount"))]
    pub amount: Option<Decimal>,
    pub payment_date: Option<DateTime<Utc>>,
}

/// Payment body under `/customer/{id}/orders/{id}/payment`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct OrderPaymentRequest {
    pub status: Option<PaymentStatus>,
    #[validate(custom(function = "positive_amount"))]
    pub amount: Decimal,
    pub payment_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct OrderPaymentUpdate {
    pub status: Option<PaymentStatus>,
    #[validate(custom(function = "positive_amount"))]
    pub amount: Option<Decimal>,
    pub payment_date: Option<DateTime<Utc>>,
}

impl OrderPaymentRequest {
    pub fn for_order(self, order_id: i32) -> CreatePaymentRequest {
        CreatePaymentRequest {
            order_id,
            status: self.status,
            amount: self.amount,
            payment_date: self.payment_date,
        }
    }
}

impl From<OrderPaymentUpdate> for UpdatePaymentRequest {
    fn from(update: OrderPaymentUpdate) -> Self {
        Self {
            order_id: None,
            status: update.status,
            amount: update.amount,
            payment_date: update.payment_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_and_string_amounts() {
        let numeric: OrderPaymentRequest = serde_json::from_str(r#"{"amount":100.00}"#).unwrap();
        let text: OrderPaymentRequest = serde_json::from_str(r#"{"amount":"100.00"}"#).unwrap();
        assert_eq!(numeric.amount, text.amount);
        assert!(numeric.validate().is_ok());
    }

    #[test]
    fn negative_amount_is_rejected() {
        let req = OrderPaymentRequest {
            status: Some(PaymentStatus::Paid),
            amount: Decimal::new(-100, 2),
            payment_date: None,
        };
        assert!(req.validate().unwrap_err().field_errors().contains_key("amount"));
    }
}
