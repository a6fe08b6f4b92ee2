use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::order_details::{CreateOrderDetailRequest, UpdateOrderDetailRequest},
    error::{AppError, AppResult},
    models::OrderDetail,
    response::ApiResponse,
    routes::params::Pagination,
    services::order_detail_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_order_details).post(create_order_detail))
        .route(
            "/{id}",
            get(get_order_detail).put(update_order_detail).delete(delete_order_detail),
        )
}

#[utoipa::path(
    get,
    path = "/orderdetail",
    params(Pagination),
    responses(
        (status = 200, description = "List order_details", body = ApiResponse<Vec<OrderDetail>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Order details"
)]
pub async fn list_order_details(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<OrderDetail>>>> {
    let (items, meta) = order_detail_service::list(&state.orm, &pagination).await?;
    Ok(Json(ApiResponse::success("Order details", items, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/orderdetail",
    request_body = CreateOrderDetailRequest,
    responses(
        (status = 201, description = "Order detail created", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Referenced record not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Order details"
)]
pub async fn create_order_detail(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderDetailRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<OrderDetail>>)> {
    payload.validate()?;
    let created = order_detail_service::create(&state.orm, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Order detail created", created)),
    ))
}

#[utoipa::path(
    get,
    path = "/orderdetail/{id}",
    params(("id" = i32, Path, description = "Order detail id")),
    responses(
        (status = 200, description = "Order detail", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Order detail not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Order details"
)]
pub async fn get_order_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    let found = order_detail_service::get(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order detail {id}")))?;
    Ok(Json(ApiResponse::record("Order detail", found)))
}

#[utoipa::path(
    put,
    path = "/orderdetail/{id}",
    params(("id" = i32, Path, description = "Order detail id")),
    request_body = UpdateOrderDetailRequest,
    responses(
        (status = 200, description = "Order detail updated", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Order detail or referenced record not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Order details"
)]
pub async fn update_order_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderDetailRequest>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    payload.validate()?;
    let updated = order_detail_service::update(&state.orm, id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order detail {id}")))?;
    Ok(Json(ApiResponse::record("Order detail updated", updated)))
}

#[utoipa::path(
    delete,
    path = "/orderdetail/{id}",
    params(("id" = i32, Path, description = "Order detail id")),
    responses(
        (status = 200, description = "Order detail deleted", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Order detail not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Order details"
)]
pub async fn delete_order_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    let deleted = order_detail_service::delete(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order detail {id}")))?;
    Ok(Json(ApiResponse::record("Order detail deleted", deleted)))
}
