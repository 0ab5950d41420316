//! Bearer-token gate for admin-only routes.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use crate::error::ApiError;
use crate::state::AppState;

/// Every rejection uses the same body so a caller cannot tell a missing
/// header from a revoked token.
const REJECTION: &str = "Invalid or expired token";

/// Proof that the request carried an active admin session token.
///
/// Use as an extractor parameter in any handler that requires the admin gate:
///
/// ```ignore
/// async fn delete_project(_session: AdminSession, ...) -> ApiResult<...> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            bearer_token(&parts.headers).ok_or_else(|| ApiError::unauthorized(REJECTION))?;

        if !state.tokens.authorize(&token).await {
            return Err(ApiError::unauthorized(REJECTION));
        }

        Ok(AdminSession { token })
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("authorization")?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_tokens() {
        assert_eq!(
            bearer_token(&headers_with("Bearer abc123")).as_deref(),
            Some("abc123")
        );
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
        assert_eq!(bearer_token(&headers_with("Basic abc123")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
