use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use contracts::system::access::{AccessTier, ApiResource};
use contracts::system::auth::TokenClaims;

/// Borrows only the headers: `Body` is not `Sync`, so `&Request` cannot be held across an await.
async fn claims_from_headers(headers: &HeaderMap) -> Result<TokenClaims, StatusCode> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    super::jwt::validate_token(token)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)
}

/// Middleware that requires valid JWT authentication
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let claims = claims_from_headers(req.headers()).await?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Middleware that requires the Full access tier (user management)
pub async fn require_admin(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let claims = claims_from_headers(req.headers()).await?;

    if !AccessTier::from_role(Some(claims.role)).can_manage_users() {
        return Err(StatusCode::FORBIDDEN);
    }

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Middleware guarding one business resource: reads need `can_read`,
/// every other method needs `can_write`.
pub async fn require_resource(
    State(resource): State<ApiResource>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let claims = claims_from_headers(req.headers()).await?;

    if !is_permitted(resource, req.method(), claims.role) {
        tracing::warn!(
            "User {} (role {}) denied {} /api/{}",
            claims.username,
            claims.role,
            req.method(),
            resource.path()
        );
        return Err(StatusCode::FORBIDDEN);
    }

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

fn is_permitted(resource: ApiResource, method: &Method, role: i32) -> bool {
    if method == Method::GET || method == Method::HEAD {
        resource.can_read(Some(role))
    } else {
        resource.can_write(Some(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_method_decides_read_or_write() {
        assert!(is_permitted(ApiResource::Customers, &Method::GET, 3));
        assert!(!is_permitted(ApiResource::Customers, &Method::POST, 3));
        assert!(is_permitted(ApiResource::Rent, &Method::PATCH, 3));
        assert!(!is_permitted(ApiResource::Rent, &Method::DELETE, 2));
        assert!(is_permitted(ApiResource::Workers, &Method::DELETE, 1));
    }

    #[tokio::test]
    async fn test_missing_or_malformed_header_is_unauthorized() {
        let empty = HeaderMap::new();
        assert_eq!(
            claims_from_headers(&empty).await.unwrap_err(),
            StatusCode::UNAUTHORIZED
        );

        let mut basic = HeaderMap::new();
        basic.insert("Authorization", HeaderValue::from_static("Basic YWRtaW4="));
        assert_eq!(
            claims_from_headers(&basic).await.unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
    }
}
