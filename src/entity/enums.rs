use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum OrderStatus {
    #[default]
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Shipped")]
    Shipped,
    #[sea_orm(string_value = "Completed")]
    Completed,
    #[sea_orm(string_value = "Cancelled")]
    Cancelled,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PaymentStatus {
    #[default]
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Paid")]
    Paid,
    #[sea_orm(string_value = "Refunded")]
    Refunded,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum GiftType {
    #[sea_orm(string_value = "Certificate")]
    Certificate,
    #[sea_orm(string_value = "Gift")]
    Gift,
}

/// Unit a gift amount is expressed in. Stored and serialized as `USD` or `%`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum GiftUnit {
    #[sea_orm(string_value = "USD")]
    #[serde(rename = "USD")]
    Usd,
    #[sea_orm(string_value = "%")]
    #[serde(rename = "%", alias = "Percent")]
    Percent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gift_unit_accepts_symbol_and_word() {
        let symbol: GiftUnit = serde_json::from_str("\"%\"").unwrap();
        let word: GiftUnit = serde_json::from_str("\"Percent\"").unwrap();
        assert_eq!(symbol, GiftUnit::Percent);
        assert_eq!(word, GiftUnit::Percent);
        assert_eq!(serde_json::to_string(&GiftUnit::Usd).unwrap(), "\"USD\"");
    }

    #[test]
    fn statuses_default_to_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
    }

    #[test]
    fn unknown_order_status_is_rejected() {
        assert!(serde_json::from_str::<OrderStatus>("\"Lost\"").is_err());
    }
}
