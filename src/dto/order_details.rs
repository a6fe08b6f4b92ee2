use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOrderDetailRequest {
    pub order_id: i32,
    pub product_id: i32,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderDetailRequest {
    pub order_id: Option<i32>,
    pub product_id: Option<i32>,
    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
}

/// Line body under `/customer/{id}/orders/{id}/orderdetail`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct OrderLineRequest {
    pub product_id: i32,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct OrderLineUpdate {
    pub product_id: Option<i32>,
    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
}

impl OrderLineRequest {
    pub fn for_order(self, order_id: i32) -> CreateOrderDetailRequest {
        CreateOrderDetailRequest {
            order_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}

impl From<OrderLineUpdate> for UpdateOrderDetailRequest {
    fn from(update: OrderLineUpdate) -> Self {
        Self {
            order_id: None,
            product_id: update.product_id,
            quantity: update.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_defaults_to_one() {
        let req: CreateOrderDetailRequest =
            serde_json::from_str(r#"{"order_id":10,"product_id":3}"#).unwrap();
        assert_eq!(req.quantity, 1);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let req = OrderLineRequest {
            product_id: 3,
            quantity: 0,
        };
        assert!(req.validate().is_err());
    }
}
