use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::positive_amount;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(custom(function = "positive_amount"))]
    pub price: Decimal,
    pub supplier_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[validate(custom(function = "positive_amount"))]
    pub price: Option<Decimal>,
    pub supplier_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_must_be_positive() {
        let req = CreateProductRequest {
            name: "Mug".into(),
            price: Decimal::ZERO,
            supplier_id: None,
        };
        assert!(req.validate().unwrap_err().field_errors().contains_key("price"));
    }

    #[test]
    fn price_accepts_string_amounts() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name":"Mug","price":"123.45"}"#).unwrap();
        assert_eq!(req.price, Decimal::new(12345, 2));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn price_outside_numeric_10_2_is_rejected() {
        for price in ["0.001", "1.005", "123456789.00", "100000000"] {
            let req: CreateProductRequest = serde_json::from_str(&format!(
                r#"{{"name":"Mug","price":"{price}"}}"#
            ))
            .unwrap();
            let errors = req.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("price"), "{price}");
        }

        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name":"Mug","price":"99999999.99"}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn update_checks_only_supplied_fields() {
        let req = UpdateProductRequest {
            price: Some(Decimal::new(-5, 0)),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
        assert!(!errors.field_errors().contains_key("name"));
    }
}
