use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{FixedOffset, Utc};

use crate::shared::format::format_number;

const KABUL_OFFSET_SECS: i32 = 4 * 3600 + 30 * 60;

/// Current Kabul time as HH:MM:SS
fn local_time() -> String {
    match FixedOffset::east_opt(KABUL_OFFSET_SECS) {
        Some(offset) => Utc::now().with_timezone(&offset).format("%H:%M:%S").to_string(),
        None => Utc::now().format("%H:%M:%S").to_string(),
    }
}

/// Request log middleware
///
/// Prints to the console:
/// - local time
/// - duration (ms)
/// - response size
/// - status code
/// - method and path
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Read the body to know the real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(_) => {
            println!(
                "\x1b[33m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
                local_time(),
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                uri.path()
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    // Cyan for success, yellow for everything else
    let color_code = if parts.status.is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        local_time(),
        start.elapsed().as_millis(),
        format_number(bytes.len()),
        parts.status.as_u16(),
        method,
        uri.path()
    );

    Response::from_parts(parts, Body::from(bytes))
}
