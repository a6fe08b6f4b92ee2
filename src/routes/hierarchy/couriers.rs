use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::couriers::{OrderCourierRequest, OrderCourierUpdate},
    error::{AppError, AppResult},
    models::Courier,
    response::ApiResponse,
    services::{
        courier_service,
        ownership::{self, CourierPath, OrderPath},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_order_courier).post(create_order_courier))
        .route(
            "/{courier_id}",
            get(get_courier).put(update_courier).delete(delete_courier),
        )
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders/{order_id}/courier",
    params(OrderPath),
    responses(
        (status = 200, description = "The order's courier", body = ApiResponse<Courier>),
        (status = 404, description = "Order has no courier, or the chain is broken")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn get_order_courier(
    State(state): State<AppState>,
    Path(path): Path<OrderPath>,
) -> AppResult<Json<ApiResponse<Courier>>> {
    ownership::order(&state.orm, path).await?;
    let courier = courier_service::find_for_order(&state.orm, path.order_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Courier for order {}", path.order_id)))?;
    Ok(Json(ApiResponse::record("Courier", courier)))
}

#[utoipa::path(
    post,
    path = "/customer/{customer_id}/orders/{order_id}/courier",
    params(OrderPath),
    request_body = OrderCourierRequest,
    responses(
        (status = 201, description = "Courier assigned", body = ApiResponse<Courier>),
        (status = 400, description = "Order already has a courier"),
        (status = 404, description = "Customer or order not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn create_order_courier(
    State(state): State<AppState>,
    Path(path): Path<OrderPath>,
    Json(payload): Json<OrderCourierRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Courier>>)> {
    payload.validate()?;
    ownership::order(&state.orm, path).await?;
    let courier = courier_service::create(&state.orm, payload.for_order(path.order_id)).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Courier created", courier)),
    ))
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders/{order_id}/courier/{courier_id}",
    params(CourierPath),
    responses(
        (status = 200, description = "Courier", body = ApiResponse<Courier>),
        (status = 404, description = "Courier not found under this order")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn get_courier(
    State(state): State<AppState>,
    Path(path): Path<CourierPath>,
) -> AppResult<Json<ApiResponse<Courier>>> {
    let courier = ownership::courier(&state.orm, path).await?;
    Ok(Json(ApiResponse::record("Courier", Courier::from(courier))))
}

#[utoipa::path(
    put,
    path = "/customer/{customer_id}/orders/{order_id}/courier/{courier_id}",
    params(CourierPath),
    request_body = OrderCourierUpdate,
    responses(
        (status = 200, description = "Courier updated", body = ApiResponse<Courier>),
        (status = 404, description = "Courier not found under this order"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn update_courier(
    State(state): State<AppState>,
    Path(path): Path<CourierPath>,
    Json(payload): Json<OrderCourierUpdate>,
) -> AppResult<Json<ApiResponse<Courier>>> {
    payload.validate()?;
    ownership::courier(&state.orm, path).await?;
    let courier = courier_service::update(&state.orm, path.courier_id, payload.into())
        .await?
        .ok_or_else(|| AppError::not_found(format!("Courier {}", path.courier_id)))?;
    Ok(Json(ApiResponse::record("Courier updated", courier)))
}

#[utoipa::path(
    delete,
    path = "/customer/{customer_id}/orders/{order_id}/courier/{courier_id}",
    params(CourierPath),
    responses(
        (status = 200, description = "Courier removed", body = ApiResponse<Courier>),
        (status = 404, description = "Courier not found under this order")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn delete_courier(
    State(state): State<AppState>,
    Path(path): Path<CourierPath>,
) -> AppResult<Json<ApiResponse<Courier>>> {
    ownership::courier(&state.orm, path).await?;
    let courier = courier_service::delete(&state.orm, path.courier_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Courier {}", path.courier_id)))?;
    Ok(Json(ApiResponse::record("Courier deleted", courier)))
}
