use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IncreaseError {
    #[error("missing api key: set INCREASE_API_KEY or pass a non-empty key")]
    MissingApiKey,

    #[error("invalid environment configuration: {0}")]
    Environment(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("api rejected request: {0}")]
    Api(#[from] ApiError),
}

impl IncreaseError {
    /// The API error, if the server rejected the request.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            IncreaseError::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type reported in the `type` field of an Increase error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    InvalidParametersError,
    MalformedRequestError,
    InvalidApiKeyError,
    EnvironmentMismatchError,
    InsufficientPermissionsError,
    PrivateFeatureError,
    ApiMethodNotFoundError,
    ObjectNotFoundError,
    IdempotencyKeyAlreadyUsedError,
    InvalidOperationError,
    RateLimitedError,
    InternalServerError,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self {
            ApiErrorKind::InvalidParametersError => "invalid_parameters_error",
            ApiErrorKind::MalformedRequestError => "malformed_request_error",
            ApiErrorKind::InvalidApiKeyError => "invalid_api_key_error",
            ApiErrorKind::EnvironmentMismatchError => "environment_mismatch_error",
            ApiErrorKind::InsufficientPermissionsError => "insufficient_permissions_error",
            ApiErrorKind::PrivateFeatureError => "private_feature_error",
            ApiErrorKind::ApiMethodNotFoundError => "api_method_not_found_error",
            ApiErrorKind::ObjectNotFoundError => "object_not_found_error",
            ApiErrorKind::IdempotencyKeyAlreadyUsedError => "idempotency_key_already_used_error",
            ApiErrorKind::InvalidOperationError => "invalid_operation_error",
            ApiErrorKind::RateLimitedError => "rate_limited_error",
            ApiErrorKind::InternalServerError => "internal_server_error",
            ApiErrorKind::Unknown => "unknown",
        };
        f.write_str(v)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub kind: ApiErrorKind,
    pub title: String,
    pub detail: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.status, self.kind, self.title)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    kind: ApiErrorKind,
    title: Option<String>,
    detail: Option<String>,
}

impl ApiError {
    /// Build an error from a non-2xx response. Bodies that are not Increase
    /// error objects are kept verbatim in `detail`.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => ApiError {
                status,
                kind: parsed.kind,
                title: parsed.title.unwrap_or_else(|| parsed.kind.to_string()),
                detail: parsed.detail,
            },
            Err(_) => ApiError {
                status,
                kind: ApiErrorKind::Unknown,
                title: format!("unexpected status {status}"),
                detail: Some(body.trim().to_string()).filter(|s| !s.is_empty()),
            },
        }
    }

    /// Rate limits and server-side failures; retrying is left to the caller.
    pub fn is_retryable(&self) -> bool {
        self.status == 429 || self.status >= 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_increase_error_body() {
        let body = json!({
            "status": 404,
            "type": "object_not_found_error",
            "title": "Could not find the specified object.",
            "detail": "No Account with id account_missing.",
            "resource_id": "account_missing"
        })
        .to_string();
        let err = ApiError::from_response(404, &body);
        assert_eq!(err.kind, ApiErrorKind::ObjectNotFoundError);
        assert_eq!(err.title, "Could not find the specified object.");
        assert_eq!(
            err.detail.as_deref(),
            Some("No Account with id account_missing.")
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn unrecognized_type_maps_to_unknown() {
        let body = json!({ "type": "brand_new_error", "title": "New" }).to_string();
        let err = ApiError::from_response(400, &body);
        assert_eq!(err.kind, ApiErrorKind::Unknown);
        assert_eq!(err.title, "New");
    }

    #[test]
    fn non_json_body_is_kept_as_detail() {
        let err = ApiError::from_response(502, "Bad Gateway\n");
        assert_eq!(err.kind, ApiErrorKind::Unknown);
        assert_eq!(err.detail.as_deref(), Some("Bad Gateway"));
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "502 unknown: unexpected status 502 (Bad Gateway)");
    }

    #[test]
    fn rate_limit_is_retryable() {
        let body = json!({ "type": "rate_limited_error", "title": "Slow down" }).to_string();
        let err = ApiError::from_response(429, &body);
        assert_eq!(err.kind, ApiErrorKind::RateLimitedError);
        assert!(err.is_retryable());
    }
}
