use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::positive_amount;
use crate::entity::enums::{GiftType, GiftUnit};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateGiftRequest {
    #[validate(custom(function = "positive_amount"))]
    pub amount: Decimal,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub gift_type: Option<GiftType>,
    pub unit: GiftUnit,
    pub payment_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateGiftRequest {
    #[validate(custom(function = "positive_amount"))]
    pub amount: Option<Decimal>,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub gift_type: Option<GiftType>,
    pub unit: Option<GiftUnit>,
    pub payment_id: Option<i32>,
}

/// Gift body under `/customer/{id}/orders/{id}/payment/{id}/gifts`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PaymentGiftRequest {
    #[validate(custom(function = "positive_amount"))]
    pub amount: Decimal,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub gift_type: Option<GiftType>,
    pub unit: GiftUnit,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PaymentGiftUpdate {
    #[validate(custom(function = "positive_amount"))]
    pub amount: Option<Decimal>,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub gift_type: Option<GiftType>,
    pub unit: Option<GiftUnit>,
}

impl PaymentGiftRequest {
    pub fn for_payment(self, payment_id: i32) -> CreateGiftRequest {
        CreateGiftRequest {
            amount: self.amount,
            expires_at: self.expires_at,
            gift_type: self.gift_type,
            unit: self.unit,
            payment_id: Some(payment_id),
        }
    }
}

impl From<PaymentGiftUpdate> for UpdateGiftRequest {
    fn from(update: PaymentGiftUpdate) -> Self {
        Self {
            amount: update.amount,
            expires_at: update.expires_at,
            gift_type: update.gift_type,
            unit: update.unit,
            payment_id: None,
        }
    }
}
