use axum::async_trait;
use axum::extract::FromRef;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub api_key: Option<String>,
}

/// Authenticated caller of the dashboard API. The frontend backend holds the
/// shared key; end-user sessions are its concern, not this service's.
#[derive(Debug, Clone)]
pub struct AuthUser {
    #[allow(dead_code)]
    pub subject: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AuthConfig::from_ref(state);
        authorize_api_key(parts, &config)
    }
}

fn authorize_api_key(parts: &Parts, config: &AuthConfig) -> Result<AuthUser, ApiError> {
    let expected = config
        .api_key
        .as_deref()
        .ok_or_else(|| ApiError::Unauthorized("missing CM_API_KEY".into()))?;

    let provided = parts
        .headers
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("missing X-API-Key header".into()))?;

    if provided != expected {
        return Err(ApiError::Unauthorized("invalid API key".into()));
    }

    Ok(AuthUser {
        subject: "api_key".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn parts_with_key(key: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/candidates/1/dashboard");
        if let Some(key) = key {
            builder = builder.header("x-api-key", key);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn accepts_the_configured_key() {
        let config = AuthConfig {
            api_key: Some("secret".into()),
        };

        let user = authorize_api_key(&parts_with_key(Some("secret")), &config).unwrap();
        assert_eq!(user.subject, "api_key");
    }

    #[test]
    fn rejects_missing_and_wrong_keys() {
        let config = AuthConfig {
            api_key: Some("secret".into()),
        };

        assert!(matches!(
            authorize_api_key(&parts_with_key(None), &config),
            Err(ApiError::Unauthorized(_))
        ));
        assert!(matches!(
            authorize_api_key(&parts_with_key(Some("wrong")), &config),
            Err(ApiError::Unauthorized(_))
        ));
    }
}
