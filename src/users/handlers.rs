use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::{
    db::AppState,
    error::{ApiError, ApiResult},
};

use super::dto::{MessageResponse, UserBody, UserListResponse, UserResponse};
use super::repo::User;

// Ids are pulled out as raw strings so a non-numeric id renders the fixed
// envelope instead of axum's default rejection.
fn parse_id(raw: &str) -> ApiResult<u64> {
    raw.parse::<u64>()
        .map_err(|_| ApiError::BadInput("Invalid user ID".into()))
}

fn parse_body(body: Result<Json<UserBody>, JsonRejection>) -> ApiResult<UserBody> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(ApiError::BadInput(rejection.body_text())),
    }
}

#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let body = parse_body(body)?;
    let user = User::insert(&state.db, &body).await?;
    tracing::info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(UserResponse::new(user))))
}

#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = User::find_all(&state.db).await?;
    Ok(Json(UserListResponse::new(users)))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let id = parse_id(&id)?;
    let user = User::find_by_id(&state.db, id).await?;
    Ok(Json(UserResponse::new(user)))
}

#[instrument(skip(state, body))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UserBody>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let id = parse_id(&id)?;

    // Missing rows 404 before the body is even looked at.
    User::find_by_id(&state.db, id).await?;

    let body = parse_body(body)?;
    User::update(&state.db, id, &body).await?;

    // Re-fetch so the response carries the store-refreshed updated_at.
    let user = User::find_by_id(&state.db, id).await?;
    tracing::info!(user_id = id, "user updated");
    Ok(Json(UserResponse::new(user)))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    User::find_by_id(&state.db, id).await?;
    User::soft_delete(&state.db, id).await?;
    tracing::info!(user_id = id, "user soft-deleted");
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
