use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    error::{AppError, AppResult},
    models::Product,
    response::ApiResponse,
    services::{
        ownership::{self, DetailPath, ProductPath},
        product_service,
    },
    state::AppState,
};

use super::suppliers;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_line_product).post(create_line_product))
        .route(
            "/{product_id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .nest("/{product_id}/supplier", suppliers::router())
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail/{detail_id}/product",
    params(DetailPath),
    responses(
        (status = 200, description = "Product on the order line", body = ApiResponse<Product>),
        (status = 404, description = "Line has no product, or the chain is broken")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn get_line_product(
    State(state): State<AppState>,
    Path(path): Path<DetailPath>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = ownership::attached_product(&state.orm, path).await?;
    Ok(Json(ApiResponse::record("Product", Product::from(product))))
}

#[utoipa::path(
    post,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail/{detail_id}/product",
    params(DetailPath),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created and set on the line", body = ApiResponse<Product>),
        (status = 404, description = "Line not found under this order"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn create_line_product(
    State(state): State<AppState>,
    Path(path): Path<DetailPath>,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    payload.validate()?;
    let product = product_service::create_for_line(&state.orm, path, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Product created", product)),
    ))
}

#[utoipa::path(
    get,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail/{detail_id}/product/{product_id}",
    params(ProductPath),
    responses(
        (status = 200, description = "Product", body = ApiResponse<Product>),
        (status = 404, description = "Product is not on this line")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(path): Path<ProductPath>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = ownership::product(&state.orm, path).await?;
    Ok(Json(ApiResponse::record("Product", Product::from(product))))
}

#[utoipa::path(
    put,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail/{detail_id}/product/{product_id}",
    params(ProductPath),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 404, description = "Product is not on this line"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(path): Path<ProductPath>,
    Json(payload): Json<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    payload.validate()?;
    ownership::product(&state.orm, path).await?;
    let product = product_service::update(&state.orm, path.product_id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", path.product_id)))?;
    Ok(Json(ApiResponse::record("Product updated", product)))
}

#[utoipa::path(
    delete,
    path = "/customer/{customer_id}/orders/{order_id}/orderdetail/{detail_id}/product/{product_id}",
    params(ProductPath),
    responses(
        (status = 200, description = "Product deleted, the line keeps no product", body = ApiResponse<Product>),
        (status = 404, description = "Product is not on this line")
    ),
    security(("bearer_auth" = [])),
    tag = "Customer orders"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(path): Path<ProductPath>,
) -> AppResult<Json<ApiResponse<Product>>> {
    ownership::product(&state.orm, path).await?;
    let product = product_service::delete(&state.orm, path.product_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {}", path.product_id)))?;
    Ok(Json(ApiResponse::record("Product deleted", product)))
}
