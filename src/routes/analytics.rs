use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    error::AppResult,
    response::{ApiResponse, Meta},
    services::analytics_service::{self, OrderSummaryRow, RandomOrder},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders-summary", get(orders_summary))
        .route("/create-random-order/{customer_id}", post(create_random_order))
}

#[utoipa::path(
    get,
    path = "/analytics/orders-summary",
    responses(
        (status = 200, description = "Per-order totals", body = ApiResponse<Vec<OrderSummaryRow>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Analytics"
)]
pub async fn orders_summary(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<OrderSummaryRow>>>> {
    let rows = analytics_service::orders_summary(&state.orm).await?;
    let total = rows.len() as i64;
    Ok(Json(ApiResponse::success(
        "Orders summary",
        rows,
        Some(Meta::unpaged(total)),
    )))
}

#[utoipa::path(
    post,
    path = "/analytics/create-random-order/{customer_id}",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses(
        (status = 201, description = "Random order placed", body = ApiResponse<RandomOrder>),
        (status = 400, description = "No products to order"),
        (status = 404, description = "Customer not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Analytics"
)]
pub async fn create_random_order(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> AppResult<(StatusCode, Json<ApiResponse<RandomOrder>>)> {
    let created = analytics_service::create_random_order(&state.orm, customer_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Random order created", created)),
    ))
}
