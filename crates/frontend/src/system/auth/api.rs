//! Calls to `/api/system/auth`. These run before a session exists, so they
//! build their own requests instead of going through `api_utils`.

use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;

use crate::shared::api_utils::{api_url, error_message};

const AUTH: &str = "/api/system/auth";

async fn post<B: Serialize>(action: &str, body: &B) -> Result<Response, String> {
    Request::post(&api_url(&format!("{}/{}", AUTH, action)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))
}

async fn failure(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_message(status, &body)
}

pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let response = post("login", &LoginRequest { username, password }).await?;

    match response.status() {
        401 => Err("نام کاربری یا رمز عبور اشتباه است".to_string()),
        _ if !response.ok() => Err(failure(response).await),
        _ => response
            .json::<LoginResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e)),
    }
}

/// New access token for a stored refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let response = post("refresh", &RefreshRequest { refresh_token }).await?;
    if !response.ok() {
        return Err(failure(response).await);
    }
    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn logout(refresh_token: String) -> Result<(), String> {
    let response = post("logout", &RefreshRequest { refresh_token }).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(failure(response).await)
    }
}

pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url(&format!("{}/me", AUTH)))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(failure(response).await);
    }
    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
