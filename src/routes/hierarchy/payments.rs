use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::payments::{OrderPaymentRequest, OrderPaymentUpdate},
    error::{AppError, AppResult},
    models::Payment,
    response::ApiResponse,
    services::{
        ownership::{self, OrderPath, PaymentPath},
        payment_service,
    },
    state::AppState,
};

use super::gifts;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_order_payment).post(create_order_payment))
        .route(
            "/{payment_id}",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
        .nest("/{payment_id}/gifts", gifts::router())
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders/{order_id}/payment",
    params(OrderPath),
    responses(
        (status = 200, description = "The order's payment", body = ApiResponse<Payment>),
        (status = 404, description = "Order has no payment, or the chain is broken")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn get_order_payment(
    State(state): State<AppState>,
    Path(path): Path<OrderPath>,
) -> AppResult<Json<ApiResponse<Payment>>> {
    ownership::order(&state.orm, path).await?;
    let payment = payment_service::find_for_order(&state.orm, path.order_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Payment for order {}", path.order_id)))?;
    Ok(Json(ApiResponse::record("Payment", payment)))
}

#[utoipa::path(
    post,
    path = "/customer/{customer_id}/orders/{order_id}/payment",
    params(OrderPath),
    request_body = OrderPaymentRequest,
    responses(
        (status = 201, description = "Payment created", body = ApiResponse<Payment>),
        (status = 400, description = "Order already has a payment"),
        (status = 404, description = "Customer or order not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn create_order_payment(
    State(state): State<AppState>,
    Path(path): Path<OrderPath>,
    Json(payload): Json<OrderPaymentRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Payment>>)> {
    payload.validate()?;
    ownership::order(&state.orm, path).await?;
    let payment = payment_service::create(&state.orm, payload.for_order(path.order_id)).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Payment created", payment)),
    ))
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders/{order_id}/payment/{payment_id}",
    params(PaymentPath),
    responses(
        (status = 200, description = "Payment", body = ApiResponse<Payment>),
        (status = 404, description = "Payment not found under this order")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn get_payment(
    State(state): State<AppState>,
    Path(path): Path<PaymentPath>,
) -> AppResult<Json<ApiResponse<Payment>>> {
    let payment = ownership::payment(&state.orm, path).await?;
    Ok(Json(ApiResponse::record("Payment", Payment::from(payment))))
}

#[utoipa::path(
    put,
    path = "/customer/{customer_id}/orders/{order_id}/payment/{payment_id}",
    params(PaymentPath),
    request_body = OrderPaymentUpdate,
    responses(
        (status = 200, description = "Payment updated", body = ApiResponse<Payment>),
        (status = 404, description = "Payment not found under this order"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn update_payment(
    State(state): State<AppState>,
    Path(path): Path<PaymentPath>,
    Json(payload): Json<OrderPaymentUpdate>,
) -> AppResult<Json<ApiResponse<Payment>>> {
    payload.validate()?;
    ownership::payment(&state.orm, path).await?;
    let payment = payment_service::update(&state.orm, path.payment_id, payload.into())
        .await?
        .ok_or_else(|| AppError::not_found(format!("Payment {}", path.payment_id)))?;
    Ok(Json(ApiResponse::record("Payment updated", payment)))
}

#[utoipa::path(
    delete,
    path = "/customer/{customer_id}/orders/{order_id}/payment/{payment_id}",
    params(PaymentPath),
    responses(
        (status = 200, description = "Payment deleted, its gifts detached", body = ApiResponse<Payment>),
        (status = 404, description = "Payment not found under this order")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(path): Path<PaymentPath>,
) -> AppResult<Json<ApiResponse<Payment>>> {
    ownership::payment(&state.orm, path).await?;
    let payment = payment_service::delete(&state.orm, path.payment_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Payment {}", path.payment_id)))?;
    Ok(Json(ApiResponse::record("Payment deleted", payment)))
}
