use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::completion::use_cases::generate::{
    GenerateCompletionParams, GenerateCompletionUseCase,
};

use crate::api::completion::dto::{CompletionRequest, CompletionResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CompletionApi {
    generate_use_case: Arc<dyn GenerateCompletionUseCase>,
}

impl CompletionApi {
    pub fn new(generate_use_case: Arc<dyn GenerateCompletionUseCase>) -> Self {
        Self { generate_use_case }
    }
}

/// Completion API
///
/// Sends one line of user text to the hosted model.
#[OpenApi]
impl CompletionApi {
    /// Ask the model
    ///
    /// Issues exactly one model call per request and returns its text verbatim.
    /// Empty input is answered with 422 and never reaches the model.
    #[oai(path = "/completions", method = "post", tag = "ApiTags::Completions")]
    async fn create_completion(&self, body: Json<CompletionRequest>) -> CreateCompletionResponse {
        let params = GenerateCompletionParams {
            input: body.0.input,
        };

        match self.generate_use_case.execute(params).await {
            Ok(completion) => CreateCompletionResponse::Ok(Json(completion.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => CreateCompletionResponse::UnprocessableEntity(json),
                    _ => CreateCompletionResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCompletionResponse {
    #[oai(status = 200)]
    Ok(Json<CompletionResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
