use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failure taxonomy surfaced to inbound callers. The upstream client is the
/// sole translator from transport-level failures into these variants; the
/// message string is the only detail that reaches the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),

    /// Upstream rejected the request, including the "week anchor is not a
    /// Monday" sub-case.
    #[error("{0}")]
    BadUpstreamRequest(String),

    #[error("{0}")]
    UpstreamNotFound(String),

    #[error("{0}")]
    UpstreamServerError(String),

    /// Upstream body was not valid JSON or did not match the expected shape.
    #[error("{0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Unexpected(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadUpstreamRequest(_) | AppError::MalformedResponse(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UpstreamNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamServerError(_) | AppError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "message": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_taxonomy_to_status_codes() {
        let cases = [
            (AppError::Unauthorized("a".into()), StatusCode::UNAUTHORIZED),
            (AppError::BadUpstreamRequest("b".into()), StatusCode::BAD_REQUEST),
            (AppError::UpstreamNotFound("c".into()), StatusCode::NOT_FOUND),
            (
                AppError::UpstreamServerError("d".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AppError::MalformedResponse("e".into()), StatusCode::BAD_REQUEST),
            (AppError::Unexpected("f".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{error}");
        }
    }

    #[actix_web::test]
    async fn renders_message_only() {
        let response = AppError::UpstreamNotFound("nothing here".into()).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "message": "nothing here" }));
    }
}
