use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::order_details::{OrderLineRequest, OrderLineUpdate},
    error::{AppError, AppResult},
    models::OrderDetail,
    response::ApiResponse,
    routes::params::Pagination,
    services::{
        order_detail_service,
        ownership::{self, DetailPath, OrderPath},
    },
    state::AppState,
};

use super::products;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_order_lines).post(create_order_line))
        .route(
            "/{detail_id}",
            get(get_order_line)
                .put(update_order_line)
                .delete(delete_order_line),
        )
        .nest("/{detail_id}/product", products::router())
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail",
    params(OrderPath, Pagination),
    responses(
        (status = 200, description = "Lines of the order", body = ApiResponse<Vec<OrderDetail>>),
        (status = 404, description = "Customer or order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn list_order_lines(
    State(state): State<AppState>,
    Path(path): Path<OrderPath>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<OrderDetail>>>> {
    ownership::order(&state.orm, path).await?;
    let (items, meta) =
        order_detail_service::list_for_order(&state.orm, path.order_id, &pagination).await?;
    Ok(Json(ApiResponse::success("Order details", items, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail",
    params(OrderPath),
    request_body = OrderLineRequest,
    responses(
        (status = 201, description = "Order line created", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Customer, order or product not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn create_order_line(
    State(state): State<AppState>,
    Path(path): Path<OrderPath>,
    Json(payload): Json<OrderLineRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<OrderDetail>>)> {
    payload.validate()?;
    ownership::order(&state.orm, path).await?;
    let detail =
        order_detail_service::create(&state.orm, payload.for_order(path.order_id)).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Order detail created", detail)),
    ))
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail/{detail_id}",
    params(DetailPath),
    responses(
        (status = 200, description = "Order line", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Line not found under this order")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn get_order_line(
    State(state): State<AppState>,
    Path(path): Path<DetailPath>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    let detail = ownership::order_detail(&state.orm, path).await?;
    Ok(Json(ApiResponse::record("Order detail", OrderDetail::from(detail))))
}

#[utoipa::path(
    put,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail/{detail_id}",
    params(DetailPath),
    request_body = OrderLineUpdate,
    responses(
        (status = 200, description = "Order line updated", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Line or product not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn update_order_line(
    State(state): State<AppState>,
    Path(path): Path<DetailPath>,
    Json(payload): Json<OrderLineUpdate>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    payload.validate()?;
    ownership::order_detail(&state.orm, path).await?;
    let detail = order_detail_service::update(&state.orm, path.detail_id, payload.into())
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order detail {}", path.detail_id)))?;
    Ok(Json(ApiResponse::record("Order detail updated", detail)))
}

#[utoipa::path(
    delete,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail/{detail_id}",
    params(DetailPath),
    responses(
        (status = 200, description = "Order line deleted", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Line not found under this order")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn delete_order_line(
    State(state): State<AppState>,
    Path(path): Path<DetailPath>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    ownership::order_detail(&state.orm, path).await?;
    let detail = order_detail_service::delete(&state.orm, path.detail_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order detail {}", path.detail_id)))?;
    Ok(Json(ApiResponse::record("Order detail deleted", detail)))
}
