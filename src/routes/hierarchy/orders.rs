use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::orders::{CustomerOrderRequest, CustomerOrderUpdate},
    error::{AppError, AppResult},
    models::Order,
    response::ApiResponse,
    routes::params::Pagination,
    services::{
        order_service,
        ownership::{self, CustomerPath, OrderPath},
    },
    state::AppState,
};

use super::{couriers, order_details, payments};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customer_orders).post(create_customer_order))
        .route(
            "/{order_id}",
            get(get_customer_order)
                .put(update_customer_order)
                .delete(delete_customer_order),
        )
        .nest("/{order_id}/payment", payments::router())
        .nest("/{order_id}/courier", couriers::router())
        .nest("/{order_id}/orderdetail", order_details::router())
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders",
    params(CustomerPath, Pagination),
    responses(
        (status = 200, description = "Orders of the customer", body = ApiResponse<Vec<Order>>),
        (status = 404, description = "Customer not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn list_customer_orders(
    State(state): State<AppState>,
    Path(path): Path<CustomerPath>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<Order>>>> {
    ownership::customer(&state.orm, path).await?;
    let (items, meta) =
        order_service::list_for_customer(&state.orm, path.customer_id, &pagination).await?;
    Ok(Json(ApiResponse::success("Orders", items, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/customer/{customer_id}/orders",
    params(CustomerPath),
    request_body = CustomerOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<Order>),
        (status = 404, description = "Customer not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn create_customer_order(
    State(state): State<AppState>,
    Path(path): Path<CustomerPath>,
    Json(payload): Json<CustomerOrderRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Order>>)> {
    payload.validate()?;
    let order = order_service::create(&state.orm, payload.for_customer(path.customer_id)).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Order created", order)),
    ))
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders/{order_id}",
    params(OrderPath),
    responses(
        (status = 200, description = "Order", body = ApiResponse<Order>),
        (status = 404, description = "Customer or order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn get_customer_order(
    State(state): State<AppState>,
    Path(path): Path<OrderPath>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = ownership::order(&state.orm, path).await?;
    Ok(Json(ApiResponse::record("Order", Order::from(order))))
}

#[utoipa::path(
    put,
    path = "/customer/{customer_id}/orders/{order_id}",
    params(OrderPath),
    request_body = CustomerOrderUpdate,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<Order>),
        (status = 404, description = "Customer or order not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn update_customer_order(
    State(state): State<AppState>,
    Path(path): Path<OrderPath>,
    Json(payload): Json<CustomerOrderUpdate>,
) -> AppResult<Json<ApiResponse<Order>>> {
    payload.validate()?;
    ownership::order(&state.orm, path).await?;
    let order = order_service::update(&state.orm, path.order_id, payload.into())
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {}", path.order_id)))?;
    Ok(Json(ApiResponse::record("Order updated", order)))
}

#[utoipa::path(
    delete,
    path = "/customer/{customer_id}/orders/{order_id}",
    params(OrderPath),
    responses(
        (status = 200, description = "Order deleted", body = ApiResponse<Order>),
        (status = 404, description = "Customer or order not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn delete_customer_order(
    State(state): State<AppState>,
    Path(path): Path<OrderPath>,
) -> AppResult<Json<ApiResponse<Order>>> {
    ownership::order(&state.orm, path).await?;
    let order = order_service::delete(&state.orm, path.order_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {}", path.order_id)))?;
    Ok(Json(ApiResponse::record("Order deleted", order)))
}
