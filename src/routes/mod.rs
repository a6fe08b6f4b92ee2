use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    middleware::from_extractor_with_state,
    routing::get,
};

use crate::{
    middleware::auth::AuthUser,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod analytics;
pub mod auth;
pub mod couriers;
pub mod customers;
pub mod doc;
pub mod gifts;
pub mod health;
pub mod hierarchy;
pub mod order_details;
pub mod orders;
pub mod params;
pub mod payments;
pub mod products;
pub mod suppliers;

/// Resource routers behind the bearer-token gate.
pub fn create_api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/customer", customers::router())
        .nest("/supplier", suppliers::router())
        .nest("/product", products::router())
        .nest("/order", orders::router())
        .nest("/orderdetail", order_details::router())
        .nest("/courier", couriers::router())
        .nest("/payment", payments::router())
        .nest("/gift", gifts::router())
        .nest("/analytics", analytics::router())
        .route_layer(from_extractor_with_state::<AuthUser, AppState>(state))
}

/// The whole application without transport layers: open routes, gated routes, docs and the 404 fallback.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(auth::router())
        .merge(create_api_router(state.clone()))
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
