/// Centralized helpers for HTTP error responses.
///
/// Every error body has the same shape: a code, a message and a context.
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::service::ServiceError;

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code.
/// - `message`: Human-readable error message.
/// - `context`: Optional context string.
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let body = serde_json::json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    });
    HttpResponse::build(status).json(body)
}

impl ServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Encode(_) => "ENCODE_FAILED",
            ServiceError::Transport(_) => "BROKER_UNAVAILABLE",
            ServiceError::Timeout(_) => "PUBLISH_TIMEOUT",
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        http_error_response(self.code(), &self.to_string(), None, self.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{Value, json};
    use std::time::Duration;

    #[actix_web::test]
    async fn test_timeout_maps_to_internal_error_with_code() {
        let err = ServiceError::Timeout(Duration::from_secs(5));
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.expect("body");
        let value: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(
            value,
            json!({"error": {"code": "PUBLISH_TIMEOUT", "message": "Publish timed out after 5s", "context": ""}})
        );
    }

    #[actix_web::test]
    async fn test_error_body_carries_context() {
        let response = http_error_response(
            "BROKER_UNAVAILABLE",
            "said \"no\"",
            Some("redisTopic"),
            StatusCode::BAD_GATEWAY,
        );
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = to_bytes(response.into_body()).await.expect("body");
        let value: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(value["error"]["message"], "said \"no\"");
        assert_eq!(value["error"]["context"], "redisTopic");
    }
}
