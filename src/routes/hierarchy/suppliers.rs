use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::suppliers::{CreateSupplierRequest, UpdateSupplierRequest},
    error::{AppError, AppResult},
    models::Supplier,
    response::ApiResponse,
    services::{
        ownership::{self, ProductPath, SupplierPath},
        supplier_service,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_product_supplier).post(create_product_supplier))
        .route(
            "/{supplier_id}",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail/{detail_id}/product/{product_id}/supplier",
    params(ProductPath),
    responses(
        (status = 200, description = "Supplier of the product", body = ApiResponse<Supplier>),
        (status = 404, description = "Product has no supplier, or the chain is broken")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn get_product_supplier(
    State(state): State<AppState>,
    Path(path): Path<ProductPath>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    let supplier = ownership::attached_supplier(&state.orm, path).await?;
    Ok(Json(ApiResponse::record("Supplier", Supplier::from(supplier))))
}

#[utoipa::path(
    post,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail/{detail_id}/product/{product_id}/supplier",
    params(ProductPath),
    request_body = CreateSupplierRequest,
    responses(
        (status = 201, description = "Supplier created and set on the product", body = ApiResponse<Supplier>),
        (status = 404, description = "Product is not on this line"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn create_product_supplier(
    State(state): State<AppState>,
    Path(path): Path<ProductPath>,
    Json(payload): Json<CreateSupplierRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Supplier>>)> {
    payload.validate()?;
    let supplier = supplier_service::create_for_product(&state.orm, path, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Supplier created", supplier)),
    ))
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail/{detail_id}/product/{product_id}/supplier/{supplier_id}",
    params(SupplierPath),
    responses(
        (status = 200, description = "Supplier", body = ApiResponse<Supplier>),
        (status = 404, description = "Supplier does not supply this product")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(path): Path<SupplierPath>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    let supplier = ownership::supplier(&state.orm, path).await?;
    Ok(Json(ApiResponse::record("Supplier", Supplier::from(supplier))))
}

#[utoipa::path(
    put,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail/{detail_id}/product/{product_id}/supplier/{supplier_id}",
    params(SupplierPath),
    request_body = UpdateSupplierRequest,
    responses(
        (status = 200, description = "Supplier updated", body = ApiResponse<Supplier>),
        (status = 404, description = "Supplier does not supply this product"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn update_supplier(
    State(state): State<AppState>,
    Path(path): Path<SupplierPath>,
    Json(payload): Json<UpdateSupplierRequest>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    payload.validate()?;
    ownership::supplier(&state.orm, path).await?;
    let supplier = supplier_service::update(&state.orm, path.supplier_id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Supplier {}", path.supplier_id)))?;
    Ok(Json(ApiResponse::record("Supplier updated", supplier)))
}

#[utoipa::path(
    delete,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail/{detail_id}/product/{product_id}/supplier/{supplier_id}",
    params(SupplierPath),
    responses(
        (status = 200, description = "Supplier deleted", body = ApiResponse<Supplier>),
        (status = 404, description = "Supplier does not supply this product")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(path): Path<SupplierPath>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    ownership::supplier(&state.orm, path).await?;
    let supplier = supplier_service::delete(&state.orm, path.supplier_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Supplier {}", path.supplier_id)))?;
    Ok(Json(ApiResponse::record("Supplier deleted", supplier)))
}
