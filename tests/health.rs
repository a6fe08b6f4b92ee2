use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use shop_db_api::{
    config::AuthConfig,
    routes::{create_router, health::health_check},
    state::AppState,
};
use tower::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
}

#[tokio::test]
async fn health_route_is_open() {
    let app = create_router(AppState {
        orm: DatabaseConnection::Disconnected,
        auth: AuthConfig {
            jwt_secret: "test-secret".into(),
            token_ttl_minutes: 5,
        },
    });

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"]["status"], "ok");
}
