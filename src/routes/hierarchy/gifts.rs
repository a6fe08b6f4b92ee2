use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::gifts::{PaymentGiftRequest, PaymentGiftUpdate},
    error::{AppError, AppResult},
    models::Gift,
    response::ApiResponse,
    routes::params::Pagination,
    services::{
        gift_service,
        ownership::{self, GiftPath, PaymentPath},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payment_gifts).post(create_payment_gift))
        .route(
            "/{gift_id}",
            get(get_gift).put(update_gift).delete(delete_gift),
        )
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders/{order_id}/payment/{payment_id}/gifts",
    params(PaymentPath, Pagination),
    responses(
        (status = 200, description = "Gifts attached to the payment", body = ApiResponse<Vec<Gift>>),
        (status = 404, description = "Payment not found under this order")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn list_payment_gifts(
    State(state): State<AppState>,
    Path(path): Path<PaymentPath>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<Gift>>>> {
    ownership::payment(&state.orm, path).await?;
    let (items, meta) =
        gift_service::list_for_payment(&state.orm, path.payment_id, &pagination).await?;
    Ok(Json(ApiResponse::success("Gifts", items, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/customer/{customer_id}/orders/{order_id}/payment/{payment_id}/gifts",
    params(PaymentPath),
    request_body = PaymentGiftRequest,
    responses(
        (status = 201, description = "Gift created", body = ApiResponse<Gift>),
        (status = 404, description = "Payment not found under this order"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn create_payment_gift(
    State(state): State<AppState>,
    Path(path): Path<PaymentPath>,
    Json(payload): Json<PaymentGiftRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Gift>>)> {
    payload.validate()?;
    ownership::payment(&state.orm, path).await?;
    let gift = gift_service::create(&state.orm, payload.for_payment(path.payment_id)).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Gift created", gift)),
    ))
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders/{order_id}/payment/{payment_id}/gifts/{gift_id}",
    params(GiftPath),
    responses(
        (status = 200, description = "Gift", body = ApiResponse<Gift>),
        (status = 404, description = "Gift not found under this payment")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn get_gift(
    State(state): State<AppState>,
    Path(path): Path<GiftPath>,
) -> AppResult<Json<ApiResponse<Gift>>> {
    let gift = ownership::gift(&state.orm, path).await?;
    Ok(Json(ApiResponse::record("Gift", Gift::from(gift))))
}

#[utoipa::path(
    put,
    path = "/customer/{customer_id}/orders/{order_id}/payment/{payment_id}/gifts/{gift_id}",
    params(GiftPath),
    request_body = PaymentGiftUpdate,
    responses(
        (status = 200, description = "Gift updated", body = ApiResponse<Gift>),
        (status = 404, description = "Gift not found under this payment"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn update_gift(
    State(state): State<AppState>,
    Path(path): Path<GiftPath>,
    Json(payload): Json<PaymentGiftUpdate>,
) -> AppResult<Json<ApiResponse<Gift>>> {
    payload.validate()?;
    ownership::gift(&state.orm, path).await?;
    let gift = gift_service::update(&state.orm, path.gift_id, payload.into())
        .await?
        .ok_or_else(|| AppError::not_found(format!("Gift {}", path.gift_id)))?;
    Ok(Json(ApiResponse::record("Gift updated", gift)))
}

#[utoipa::path(
    delete,
    path = "/customer/{customer_id}/orders/{order_id}/payment/{payment_id}/gifts/{gift_id}",
    params(GiftPath),
    responses(
        (status = 200, description = "Gift deleted", body = ApiResponse<Gift>),
        (status = 404, description = "Gift not found under this payment")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn delete_gift(
    State(state): State<AppState>,
    Path(path): Path<GiftPath>,
) -> AppResult<Json<ApiResponse<Gift>>> {
    ownership::gift(&state.orm, path).await?;
    let gift = gift_service::delete(&state.orm, path.gift_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Gift {}", path.gift_id)))?;
    Ok(Json(ApiResponse::record("Gift deleted", gift)))
}
