use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::customers::{CreateCustomerRequest, UpdateCustomerRequest},
    error::{AppError, AppResult},
    models::Customer,
    response::ApiResponse,
    routes::{hierarchy, params::Pagination},
    services::customer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/{customer_id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .nest("/{customer_id}/orders", hierarchy::orders::router())
}

#[utoipa::path(
    get,
    path = "/customer",
    params(Pagination),
    responses(
        (status = 200, description = "List customers", body = ApiResponse<Vec<Customer>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Customers"
)]
pub async fn list_customers(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<Customer>>>> {
    let (items, meta) = customer_service::list(&state.orm, &pagination).await?;
    Ok(Json(ApiResponse::success("Customers", items, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/customer",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<Customer>),
        (status = 400, description = "Email already taken"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Customer>>)> {
    payload.validate()?;
    let customer = customer_service::create(&state.orm, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Customer created", customer)),
    ))
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer", body = ApiResponse<Customer>),
        (status = 404, description = "Customer not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Customers"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    let customer = customer_service::get(&state.orm, customer_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer {customer_id}")))?;
    Ok(Json(ApiResponse::record("Customer", customer)))
}

#[utoipa::path(
    put,
    path = "/customer/{customer_id}",
    params(("customer_id" = i32, Path, description = "Customer id")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = ApiResponse<Customer>),
        (status = 404, description = "Customer not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customers"
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
    Json(payload): Json<UpdateCustomerRequest>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    payload.validate()?;
    let customer = customer_service::update(&state.orm, customer_id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer {customer_id}")))?;
    Ok(Json(ApiResponse::record("Customer updated", customer)))
}

#[utoipa::path(
    delete,
    path = "/customer/{customer_id}",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer deleted with their orders", body = ApiResponse<Customer>),
        (status = 404, description = "Customer not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Customers"
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    let customer = customer_service::delete(&state.orm, customer_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Customer {customer_id}")))?;
    Ok(Json(ApiResponse::record("Customer deleted", customer)))
}
