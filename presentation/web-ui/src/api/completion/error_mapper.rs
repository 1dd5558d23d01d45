use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::completion::errors::CompletionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CompletionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CompletionError::EmptyInput => (StatusCode::UNPROCESSABLE_ENTITY, "ValidationError"),
            CompletionError::RequestFailed(_)
            | CompletionError::MalformedResponse
            | CompletionError::EmptyResponse => (StatusCode::BAD_GATEWAY, "UpstreamError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_empty_input_to_unprocessable_entity() {
        let (status, json) = CompletionError::EmptyInput.into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.message, "completion.empty_input");
    }

    #[test]
    fn should_hide_upstream_detail_from_response() {
        let (status, json) =
            CompletionError::request_failed("status 403: key leaked?").into_error_response();

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json.0.name, "UpstreamError");
        assert_eq!(json.0.message, "completion.request_failed");
    }
}
