use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::payments::{CreatePaymentRequest, UpdatePaymentRequest},
    error::{AppError, AppResult},
    models::Payment,
    response::ApiResponse,
    routes::params::Pagination,
    services::payment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payments).post(create_payment))
        .route(
            "/{id}",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
}

#[utoipa::path(
    get,
    path = "/payment",
    params(Pagination),
    responses(
        (status = 200, description = "List payments", body = ApiResponse<Vec<Payment>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
pub async fn list_payments(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<Payment>>>> {
    let (items, meta) = payment_service::list(&state.orm, &pagination).await?;
    Ok(Json(ApiResponse::success("Payments", items, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/payment",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment created", body = ApiResponse<Payment>),
        (status = 400, description = "Order already has a payment"),
        (status = 404, description = "Referenced record not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
pub async fn create_payment(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Payment>>)> {
    payload.validate()?;
    let created = payment_service::create(&state.orm, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Payment created", created)),
    ))
}

#[utoipa::path(
    get,
    path = "/payment/{id}",
    params(("id" = i32, Path, description = "Payment id")),
    responses(
        (status = 200, description = "Payment", body = ApiResponse<Payment>),
        (status = 404, description = "Payment not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Payment>>> {
    let found = payment_service::get(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Payment {id}")))?;
    Ok(Json(ApiResponse::record("Payment", found)))
}

#[utoipa::path(
    put,
    path = "/payment/{id}",
    params(("id" = i32, Path, description = "Payment id")),
    request_body = UpdatePaymentRequest,
    responses(
        (status = 200, description = "Payment updated", body = ApiResponse<Payment>),
        (status = 400, description = "Order already has a payment"),
        (status = 404, description = "Payment or referenced record not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePaymentRequest>,
) -> AppResult<Json<ApiResponse<Payment>>> {
    payload.validate()?;
    let updated = payment_service::update(&state.orm, id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Payment {id}")))?;
    Ok(Json(ApiResponse::record("Payment updated", updated)))
}

#[utoipa::path(
    delete,
    path = "/payment/{id}",
    params(("id" = i32, Path, description = "Payment id")),
    responses(
        (status = 200, description = "Payment deleted", body = ApiResponse<Payment>),
        (status = 404, description = "Payment not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Payments"
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Payment>>> {
    let deleted = payment_service::delete(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Payment {id}")))?;
    Ok(Json(ApiResponse::record("Payment deleted", deleted)))
}
