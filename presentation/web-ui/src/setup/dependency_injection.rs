use std::sync::Arc;

use logger::TracingLogger;

use gemini::client::GeminiClient;
use gemini::text_generator::TextGeneratorGemini;

use business::application::completion::generate::GenerateCompletionUseCaseImpl;

use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub completion_api: crate::api::completion::routes::CompletionApi,
}

impl DependencyContainer {
    pub fn new(gemini_config: GeminiConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let has_instruction = gemini_config.system_instruction.is_some();
        let health_api = crate::api::health::routes::Api::new(has_instruction);

        // Infrastructure adapters
        let gemini_client =
            GeminiClient::with_base_url(gemini_config.api_key, gemini_config.base_url);
        let text_generator = Arc::new(TextGeneratorGemini::new(
            gemini_client,
            gemini_config.model.clone(),
        ));

        tracing::info!(
            model = %gemini_config.model,
            system_instruction = has_instruction,
            "Gemini text generator ready"
        );

        // Completion use cases
        let generate_use_case = Arc::new(GenerateCompletionUseCaseImpl {
            generator: text_generator,
            system_instruction: gemini_config.system_instruction,
            logger,
        });

        let completion_api = crate::api::completion::routes::CompletionApi::new(generate_use_case);

        Self {
            health_api,
            completion_api,
        }
    }
}
