use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::gifts::{CreateGiftRequest, UpdateGiftRequest},
    error::{AppError, AppResult},
    models::Gift,
    response::ApiResponse,
    routes::params::Pagination,
    services::gift_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_gifts).post(create_gift))
        .route(
            "/{id}",
            get(get_gift).put(update_gift).delete(delete_gift),
        )
}

#[utoipa::path(
    get,
    path = "/gift",
    params(Pagination),
    responses(
        (status = 200, description = "List gifts", body = ApiResponse<Vec<Gift>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Gifts"
)]
pub async fn list_gifts(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<Gift>>>> {
    let (items, meta) = gift_service::list(&state.orm, &pagination).await?;
    Ok(Json(ApiResponse::success("Gifts", items, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/gift",
    request_body = CreateGiftRequest,
    responses(
        (status = 201, description = "Gift created", body = ApiResponse<Gift>),
        (status = 404, description = "Referenced record not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Gifts"
)]
pub async fn create_gift(
    State(state): State<AppState>,
    Json(payload): Json<CreateGiftRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Gift>>)> {
    payload.validate()?;
    let created = gift_service::create(&state.orm, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::record("Gift created", created)),
    ))
}

#[utoipa::path(
    get,
    path = "/gift/{id}",
    params(("id" = i32, Path, description = "Gift id")),
    responses(
        (status = 200, description = "Gift", body = ApiResponse<Gift>),
        (status = 404, description = "Gift not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Gifts"
)]
pub async fn get_gift(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Gift>>> {
    let found = gift_service::get(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Gift {id}")))?;
    Ok(Json(ApiResponse::record("Gift", found)))
}

#[utoipa::path(
    put,
    path = "/gift/{id}",
    params(("id" = i32, Path, description = "Gift id")),
    request_body = UpdateGiftRequest,
    responses(
        (status = 200, description = "Gift updated", body = ApiResponse<Gift>),
        (status = 404, description = "Gift or referenced record not found"),
        (status = 422, description = "Validation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "Gifts"
)]
pub async fn update_gift(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGiftRequest>,
) -> AppResult<Json<ApiResponse<Gift>>> {
    payload.validate()?;
    let updated = gift_service::update(&state.orm, id, payload)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Gift {id}")))?;
    Ok(Json(ApiResponse::record("Gift updated", updated)))
}

#[utoipa::path(
    delete,
    path = "/gift/{id}",
    params(("id" = i32, Path, description = "Gift id")),
    responses(
        (status = 200, description = "Gift deleted", body = ApiResponse<Gift>),
        (status = 404, description = "Gift not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Gifts"
)]
pub async fn delete_gift(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Gift>>> {
    let deleted = gift_service::delete(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Gift {id}")))?;
    Ok(Json(ApiResponse::record("Gift deleted", deleted)))
}
