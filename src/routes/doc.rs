use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest},
        couriers::{CreateCourierRequest, OrderCourierRequest, OrderCourierUpdate, UpdateCourierRequest},
        customers::{CreateCustomerRequest, UpdateCustomerRequest},
        gifts::{CreateGiftRequest, PaymentGiftRequest, PaymentGiftUpdate, UpdateGiftRequest},
        order_details::{
            CreateOrderDetailRequest, OrderLineRequest, OrderLineUpdate, UpdateOrderDetailRequest,
        },
        orders::{CreateOrderRequest, CustomerOrderRequest, CustomerOrderUpdate, UpdateOrderRequest},
        payments::{CreatePaymentRequest, OrderPaymentRequest, OrderPaymentUpdate, UpdatePaymentRequest},
        products::{CreateProductRequest, UpdateProductRequest},
        suppliers::{CreateSupplierRequest, UpdateSupplierRequest},
    },
    entity::enums::{GiftType, GiftUnit, OrderStatus, PaymentStatus},
    models::{Courier, Customer, Gift, Order, OrderDetail, Payment, Product, Supplier, User},
    response::Meta,
    routes::{
        analytics, auth, couriers, customers, gifts, health,
        hierarchy::{
            couriers as order_couriers, gifts as payment_gifts, order_details as order_lines,
            orders as customer_orders, payments as order_payments, products as line_products,
            suppliers as product_suppliers,
        },
        order_details, orders, params, payments, products, suppliers,
    },
    services::analytics_service::{OrderSummaryRow, RandomOrder},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        customers::list_customers,
        customers::create_customer,
        customers::get_customer,
        customers::update_customer,
        customers::delete_customer,
        suppliers::list_suppliers,
        suppliers::create_supplier,
        suppliers::get_supplier,
        suppliers::update_supplier,
        suppliers::delete_supplier,
        products::list_products,
        products::create_product,
        products::get_product,
        products::update_product,
        products::delete_product,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::update_order,
        orders::delete_order,
        order_details::list_order_details,
        order_details::create_order_detail,
        order_details::get_order_detail,
        order_details::update_order_detail,
        order_details::delete_order_detail,
        couriers::list_couriers,
        couriers::create_courier,
        couriers::get_courier,
        couriers::update_courier,
        couriers::delete_courier,
        payments::list_payments,
        payments::create_payment,
        payments::get_payment,
        payments::update_payment,
        payments::delete_payment,
        gifts::list_gifts,
        gifts::create_gift,
        gifts::get_gift,
        gifts::update_gift,
        gifts::delete_gift,
        customer_orders::list_customer_orders,
        customer_orders::create_customer_order,
        customer_orders::get_customer_order,
        customer_orders::update_customer_order,
        customer_orders::delete_customer_order,
        order_payments::get_order_payment,
        order_payments::create_order_payment,
        order_payments::get_payment,
        order_payments::update_payment,
        order_payments::delete_payment,
        payment_gifts::list_payment_gifts,
        payment_gifts::create_payment_gift,
        payment_gifts::get_gift,
        payment_gifts::update_gift,
        payment_gifts::delete_gift,
        order_couriers::get_order_courier,
        order_couriers::create_order_courier,
        order_couriers::get_courier,
        order_couriers::update_courier,
        order_couriers::delete_courier,
        order_lines::list_order_lines,
        order_lines::create_order_line,
        order_lines::get_order_line,
        order_lines::update_order_line,
        order_lines::delete_order_line,
        line_products::get_line_product,
        line_products::create_line_product,
        line_products::get_product,
        line_products::update_product,
        line_products::delete_product,
        product_suppliers::get_product_supplier,
        product_suppliers::create_product_supplier,
        product_suppliers::get_supplier,
        product_suppliers::update_supplier,
        product_suppliers::delete_supplier,
        analytics::orders_summary,
        analytics::create_random_order
    ),
    components(
        schemas(
            User,
            Customer,
            Supplier,
            Product,
            Order,
            OrderDetail,
            Courier,
            Payment,
            Gift,
            OrderStatus,
            PaymentStatus,
            GiftType,
            GiftUnit,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            CreateCustomerRequest,
            UpdateCustomerRequest,
            CreateSupplierRequest,
            UpdateSupplierRequest,
            CreateProductRequest,
            UpdateProductRequest,
            CreateOrderRequest,
            UpdateOrderRequest,
            CustomerOrderRequest,
            CustomerOrderUpdate,
            CreateOrderDetailRequest,
            UpdateOrderDetailRequest,
            OrderLineRequest,
            OrderLineUpdate,
            CreateCourierRequest,
            UpdateCourierRequest,
            OrderCourierRequest,
            OrderCourierUpdate,
            CreatePaymentRequest,
            UpdatePaymentRequest,
            OrderPaymentRequest,
            OrderPaymentUpdate,
            CreateGiftRequest,
            UpdateGiftRequest,
            PaymentGiftRequest,
            PaymentGiftUpdate,
            OrderSummaryRow,
            RandomOrder,
            params::Pagination,
            Meta
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Registration and login"),
        (name = "Customers", description = "Customer endpoints"),
        (name = "Suppliers", description = "Supplier endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Order details", description = "Order line endpoints"),
        (name = "Couriers", description = "Courier endpoints"),
        (name = "Payments", description = "Payment endpoints"),
        (name = "Gifts", description = "Gift endpoints"),
        (name = "Customer orders", description = "Orders and their children reached through the owning customer"),
        (name = "Analytics", description = "Reporting and demo data"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_flat_and_nested_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/customer"));
        assert!(paths.contains_key("/gift/{id}"));
        assert!(paths.contains_key(
            "/customer/{customer_id}/orders/{order_id}/payment/{payment_id}/gifts/{gift_id}"
        ));
        assert!(paths.contains_key("/analytics/orders-summary"));
    }

    #[test]
    fn registers_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
