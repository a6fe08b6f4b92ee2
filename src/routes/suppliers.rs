use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::suppliers::{CreateSupplierRequest, UpdateSupplierRequest},
    error::{AppError, AppResult},
    models::Supplier,
    response::ApiResponse,
    routes::params::Pagination,
    services::supplier_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route(
            "/{id}",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
}

#[utoipa::path(
    get,
    path = "/supplier",
    params(Pagination),
    responses(
        (status = 200, description = "List suppliers", body = ApiResponse<Vec<Supplier>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Suppliers"
)]
pub async fn list_suppliers(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<Supplier>>>> {
    let (items, meta) = supplier_service::list(&state.orm, &pagination).await?;
    Ok(Json(ApiResponse::success("Suppliers", items, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/supplier",
    request_body = CreateSupplierRequest,
    responses(
        (status = 201, description = "Supplier created", body = ApiResponse<Supplier>),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Suppliers"
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<CreateSupplierRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Supplier>>)> {
    payload.validate()?;
    let created = supplier_service::create(&state.orm, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Supplier created", created)),
    ))
}

#[utoipa::path(
    get,
    path = "/supplier/{id}",
    params(("id" = i32, Path, description = "Supplier id")),
    responses(
        (status = 200, description = "Supplier", body = ApiResponse<Supplier>),
        (status = 404, description = "Supplier not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Suppliers"
)]
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    let found = supplier_service::get(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Supplier {id}")))?;
    Ok(Json(ApiResponse::record("Supplier", found)))
}

#[utoipa::path(
    put,
    path = "/supplier/{id}",
    params(("id" = i32, Path, description = "Supplier id")),
    request_body = UpdateSupplierRequest,
    responses(
        (status = 200, description = "Supplier updated", body = ApiResponse<Supplier>),
        (status = 404, description = "Supplier not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Suppliers"
)]
pub async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSupplierRequest>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    payload.validate()?;
    let updated = supplier_service::update(&state.orm, id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Supplier {id}")))?;
    Ok(Json(ApiResponse::record("Supplier updated", updated)))
}

#[utoipa::path(
    delete,
    path = "/supplier/{id}",
    params(("id" = i32, Path, description = "Supplier id")),
    responses(
        (status = 200, description = "Supplier deleted, its products detached", body = ApiResponse<Supplier>),
        (status = 404, description = "Supplier not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Suppliers"
)]
pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    let deleted = supplier_service::delete(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Supplier {id}")))?;
    Ok(Json(ApiResponse::record("Supplier deleted", deleted)))
}
