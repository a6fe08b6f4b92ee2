use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::couriers::{CreateCourierRequest, UpdateCourierRequest},
    error::{AppError, AppResult},
    models::Courier,
    response::ApiResponse,
    routes::params::Pagination,
    services::courier_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_couriers).post(create_courier))
        .route(
            "/{id}",
            get(get_courier).put(update_courier).delete(delete_courier),
        )
}

#[utoipa::path(
    get,
    path = "/courier",
    params(Pagination),
    responses(
        (status = 200, description = "List couriers", body = ApiResponse<Vec<Courier>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Couriers"
)]
pub async fn list_couriers(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<Courier>>>> {
    let (items, meta) = courier_service::list(&state.orm, &pagination).await?;
    Ok(Json(ApiResponse::success("Couriers", items, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/courier",
    request_body = CreateCourierRequest,
    responses(
        (status = 201, description = "Courier created", body = ApiResponse<Courier>),
        (status = 400, description = "Order already has a courier"),
        (status = 404, description = "Referenced record not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Couriers"
)]
pub async fn create_courier(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourierRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Courier>>)> {
    payload.validate()?;
    let created = courier_service::create(&state.orm, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Courier created", created)),
    ))
}

#[utoipa::path(
    get,
    path = "/courier/{id}",
    params(("id" = i32, Path, description = "Courier id")),
    responses(
        (status = 200, description = "Courier", body = ApiResponse<Courier>),
        (status = 404, description = "Courier not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Couriers"
)]
pub async fn get_courier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Courier>>> {
    let found = courier_service::get(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Courier {id}")))?;
    Ok(Json(ApiResponse::record("Courier", found)))
}

#[utoipa::path(
    put,
    path = "/courier/{id}",
    params(("id" = i32, Path, description = "Courier id")),
    request_body = UpdateCourierRequest,
    responses(
        (status = 200, description = "Courier updated", body = ApiResponse<Courier>),
        (status = 400, description = "Order already has a courier"),
        (status = 404, description = "Courier or referenced record not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Couriers"
)]
pub async fn update_courier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCourierRequest>,
) -> AppResult<Json<ApiResponse<Courier>>> {
    payload.validate()?;
    let updated = courier_service::update(&state.orm, id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Courier {id}")))?;
    Ok(Json(ApiResponse::record("Courier updated", updated)))
}

#[utoipa::path(
    delete,
    path = "/courier/{id}",
    params(("id" = i32, Path, description = "Courier id")),
    responses(
        (status = 200, description = "Courier deleted", body = ApiResponse<Courier>),
        (status = 404, description = "Courier not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Couriers"
)]
pub async fn delete_courier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Courier>>> {
    let deleted = courier_service::delete(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Courier {id}")))?;
    Ok(Json(ApiResponse::record("Courier deleted", deleted)))
}
