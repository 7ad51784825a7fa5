use axum::{extract::Json, http::StatusCode};
use contracts::system::auth::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo};

use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::{jwt, refresh_tokens};
use crate::system::users::service as user_service;

fn internal(e: anyhow::Error) -> StatusCode {
    tracing::error!("auth: {:#}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}

/// `POST /api/system/auth/login`
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    let user = user_service::verify_credentials(&request.username, &request.password)
        .await
        .map_err(internal)?
        .ok_or_else(|| {
            tracing::warn!("Rejected login for {}", request.username);
            StatusCode::UNAUTHORIZED
        })?;

    let access_token = jwt::generate_access_token(&user.id, &user.username, user.role)
        .await
        .map_err(internal)?;
    let refresh_token = jwt::generate_refresh_token();
    refresh_tokens::store(&user.id, &refresh_token)
        .await
        .map_err(internal)?;

    tracing::info!("User {} logged in (role {})", user.username, user.role);

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user: UserInfo::from(&user),
    }))
}

/// `POST /api/system/auth/refresh`; deactivated users lose their session here
pub async fn refresh(
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, StatusCode> {
    let user_id = refresh_tokens::owner(&request.refresh_token)
        .await
        .map_err(internal)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let user = user_service::get_by_id(&user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .filter(|u| u.is_active)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let access_token = jwt::generate_access_token(&user.id, &user.username, user.role)
        .await
        .map_err(internal)?;

    Ok(Json(RefreshResponse { access_token }))
}

/// `POST /api/system/auth/logout`
pub async fn logout(Json(request): Json<RefreshRequest>) -> Result<StatusCode, StatusCode> {
    refresh_tokens::revoke(&request.refresh_token)
        .await
        .map_err(internal)?;
    Ok(StatusCode::OK)
}

/// `GET /api/system/auth/me`
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Result<Json<UserInfo>, StatusCode> {
    let user = user_service::get_by_id(&claims.sub)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(UserInfo::from(&user)))
}
