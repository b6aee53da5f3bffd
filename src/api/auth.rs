//! Bearer Token Extraction
//!
//! Content routes are scoped to the caller identified by the bearer
//! token. Token issuance and verification belong to the external auth
//! backend; here the token is an opaque owner key.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::error::ApiError;

/// The authenticated owner of the content collection
#[derive(Debug, Clone)]
pub struct Owner(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for Owner
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("malformed authorization header".to_string()))?;

        Ok(Owner(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Result<Owner, ApiError> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        Owner::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_token() {
        let owner = extract(Some("Bearer tok-123")).await.unwrap();
        assert_eq!(owner.0, "tok-123");
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        assert!(matches!(
            extract(None).await,
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn test_non_bearer_rejected() {
        assert!(matches!(
            extract(Some("Basic abc")).await,
            Err(ApiError::Unauthorized(_))
        ));
        assert!(matches!(
            extract(Some("Bearer ")).await,
            Err(ApiError::Unauthorized(_))
        ));
    }
}
