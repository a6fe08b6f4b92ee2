use rust_decimal::Decimal;
use validator::ValidationError;

pub mod auth;
pub mod couriers;
pub mod customers;
pub mod gifts;
pub mod order_details;
pub mod orders;
pub mod payments;
pub mod products;
pub mod suppliers;

/// Largest amount a `NUMERIC(10, 2)` column holds, plus one cent.
const AMOUNT_CEILING: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// Money amounts must be greater than zero and fit `NUMERIC(10, 2)` exactly.
pub fn positive_amount(value: &Decimal) -> Result<(), ValidationError> {
    let message = if *value <= Decimal::ZERO {
        "must be greater than 0"
    } else if value.normalize().scale() > 2 {
        "must have at most 2 decimal places"
    } else if *value >= AMOUNT_CEILING {
        "must be less than 100000000"
    } else {
        return Ok(());
    };

    let mut err = ValidationError::new("positive_amount");
    err.message = Some(message.into());
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_amount_rejects_zero_and_negatives() {
        assert!(positive_amount(&Decimal::new(10000, 2)).is_ok());
        assert!(positive_amount(&Decimal::ZERO).is_err());
        assert!(positive_amount(&Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn positive_amount_rejects_sub_cent_precision() {
        // 0.001 would round to zero in storage, 1.005 would come back as 1.01
        assert!(positive_amount(&Decimal::new(1, 3)).is_err());
        assert!(positive_amount(&Decimal::new(1005, 3)).is_err());
        assert!(positive_amount(&Decimal::new(1500, 3)).is_ok());
    }

    #[test]
    fn positive_amount_rejects_values_beyond_column_width() {
        assert!(positive_amount(&Decimal::new(12345678900, 2)).is_err());
        assert!(positive_amount(&Decimal::new(100_000_000, 0)).is_err());
        assert!(positive_amount(&Decimal::new(9999999999, 2)).is_ok());
    }

    #[test]
    fn positive_amount_reports_reason() {
        let err = positive_amount(&Decimal::new(1005, 3)).unwrap_err();
        assert_eq!(err.message.as_deref(), Some("must have at most 2 decimal places"));
    }
}
