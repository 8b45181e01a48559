use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nba_api::client::ApiError;
use serde_json::json;
use std::fmt;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    MissingCredential,
    Internal(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential => write!(f, "balldontlie API key not configured"),
            Self::Internal(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingCredential => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "API key not configured",
                    "message": "Please set BALLDONTLIE_API_KEY environment variable"
                })),
            )
                .into_response(),
            Self::Internal(detail) => {
                // Internal detail stays in the server log.
                tracing::error!("Failed to fetch NBA scores: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch NBA scores" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApiError> for WebError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::MissingCredential => Self::MissingCredential,
            other => Self::Internal(other.to_string()),
        }
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_credential_is_a_structured_500() {
        let response = WebError::MissingCredential.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "API key not configured");
        assert!(
            body["message"].as_str().unwrap().contains("BALLDONTLIE_API_KEY"),
            "body was: {body}"
        );
    }

    #[tokio::test]
    async fn internal_errors_leak_no_detail() {
        let response = WebError::Internal("socket reset by upstream".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to fetch NBA scores");
        assert!(body.get("message").is_none());
        assert!(!body.to_string().contains("socket reset"));
    }

    #[test]
    fn missing_credential_api_error_maps_to_its_own_variant() {
        let mapped = WebError::from(ApiError::MissingCredential);
        assert!(matches!(mapped, WebError::MissingCredential));
    }
}
