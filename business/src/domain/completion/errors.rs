/// Errors raised while turning user input into a model completion.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion.empty_input")]
    EmptyInput,
    #[error("completion.request_failed")]
    RequestFailed(String),
    #[error("completion.malformed_response")]
    MalformedResponse,
    #[error("completion.empty_response")]
    EmptyResponse,
}

impl CompletionError {
    pub fn request_failed(detail: impl Into<String>) -> Self {
        CompletionError::RequestFailed(detail.into())
    }
}
