use axum::{
    extract::{Json, Path},
    http::StatusCode,
};
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};

use crate::shared::error::{ServiceError, ServiceResult};
use crate::system::auth::extractor::CurrentUser;
use crate::system::users::service;

/// GET /api/system/users
pub async fn list(user: CurrentUser) -> ServiceResult<Json<Vec<User>>> {
    tracing::debug!("User list requested by {} ({:?})", user.user_id(), user.tier());
    Ok(Json(service::list_all().await?))
}

/// GET /api/system/users/:id
pub async fn get_by_id(
    CurrentUser(_claims): CurrentUser,
    Path(id): Path<String>,
) -> ServiceResult<Json<User>> {
    service::get_by_id(&id)
        .await?
        .map(Json)
        .ok_or(ServiceError::NotFound)
}

/// POST /api/system/users
pub async fn create(
    user: CurrentUser,
    Json(dto): Json<CreateUserDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    let user_id = service::create(dto, Some(user.user_id().to_string())).await?;
    Ok(Json(serde_json::json!({"id": user_id})))
}

/// PUT|PATCH /api/system/users/:id
pub async fn update(
    CurrentUser(_claims): CurrentUser,
    Path(id): Path<String>,
    Json(mut dto): Json<UpdateUserDto>,
) -> ServiceResult<StatusCode> {
    dto.id = id;
    service::update(dto).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/system/users/:id
pub async fn delete(
    user: CurrentUser,
    Path(id): Path<String>,
) -> ServiceResult<StatusCode> {
    service::delete(&id, user.user_id()).await?;
    Ok(StatusCode::OK)
}

/// POST /api/system/users/:id/change-password
pub async fn change_password(
    user: CurrentUser,
    Path(id): Path<String>,
    Json(mut dto): Json<ChangePasswordDto>,
) -> ServiceResult<StatusCode> {
    dto.user_id = id;
    service::change_password(dto, user.user_id()).await?;
    Ok(StatusCode::OK)
}
