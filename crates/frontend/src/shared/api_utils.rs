//! API utilities for frontend-backend communication
//!
//! Every business request carries the bearer token from local storage.
//! Failures come back as a display string: the backend's `{"error": ...}`
//! message when there is one, otherwise the HTTP status.

use contracts::system::access::ApiResource;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with `/api/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `/api/<resource>` or `/api/<resource>/<id>`
pub fn resource_path(resource: ApiResource, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("/api/{}/{}", resource.path(), id),
        None => format!("/api/{}", resource.path()),
    }
}

/// URL of an uploaded file; the backend serves them under `/media`
pub fn media_link(file_name: &str) -> String {
    api_url(&contracts::shared::attachment::media_url(file_name))
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Message for a failed response body
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| match status {
            401 => "نشست شما منقضی شده است، دوباره وارد شوید".to_string(),
            403 => "شما به این بخش دسترسی ندارید".to_string(),
            _ => format!("خطای سرور (HTTP {})", status),
        })
}

async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("request failed: {} {}", status, body);
    Err(error_message(status, &body))
}

async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, String> {
    let request = request.map_err(|e| format!("Failed to build request: {}", e))?;
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await
}

fn created_id(value: &serde_json::Value) -> String {
    value["id"].as_str().unwrap_or_default().to_string()
}

/// `GET path` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send(with_auth(Request::get(&api_url(path))).build()).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// `POST path` with a JSON body; returns the id of the new record
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<String, String> {
    let response = send(with_auth(Request::post(&api_url(path))).json(body)).await?;
    let value: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(created_id(&value))
}

/// `POST path` with a JSON body, ignoring the response body
pub async fn post_action<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    send(with_auth(Request::post(&api_url(path))).json(body)).await?;
    Ok(())
}

/// `PATCH path` with a JSON body
pub async fn patch_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    send(with_auth(Request::patch(&api_url(path))).json(body)).await?;
    Ok(())
}

/// `DELETE path`
pub async fn delete(path: &str) -> Result<(), String> {
    send(with_auth(Request::delete(&api_url(path))).build()).await?;
    Ok(())
}

/// `POST path` with a multipart body; returns the id of the new record
pub async fn post_form(path: &str, form: FormData) -> Result<String, String> {
    let response = send(with_auth(Request::post(&api_url(path))).body(form)).await?;
    let value: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(created_id(&value))
}

/// `PATCH path` with a multipart body
pub async fn patch_form(path: &str, form: FormData) -> Result<(), String> {
    send(with_auth(Request::patch(&api_url(path))).body(form)).await?;
    Ok(())
}

/// Multipart body from text fields and an optional file part
pub fn build_form_data(
    fields: &[(&str, String)],
    file: Option<(&str, web_sys::File)>,
) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| format!("{e:?}"))?;
    }
    if let Some((name, file)) = file {
        form.append_with_blob_and_filename(name, &file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_backend_text() {
        assert_eq!(
            error_message(409, r#"{"error":"این کارمند معاش ثبت شده دارد"}"#),
            "این کارمند معاش ثبت شده دارد"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(error_message(500, "oops"), "خطای سرور (HTTP 500)");
        assert_eq!(error_message(502, r#"{"error":""}"#), "خطای سرور (HTTP 502)");
        assert!(error_message(403, "").contains("دسترسی"));
    }

    #[test]
    fn test_resource_path() {
        assert_eq!(resource_path(ApiResource::Staff, None), "/api/staff");
        assert_eq!(
            resource_path(ApiResource::ImportCarpets, Some("42")),
            "/api/carpet/import/42"
        );
    }

    #[test]
    fn test_created_id() {
        let value = serde_json::json!({ "id": "abc" });
        assert_eq!(created_id(&value), "abc");
        assert_eq!(created_id(&serde_json::json!({})), "");
    }
}
