use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Shared Gemini HTTP client configuration.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Name of the header carrying the API key.
    pub fn auth_header_name(&self) -> &'static str {
        "x-goog-api-key"
    }

    /// Returns the generateContent endpoint URL for `model`.
    pub fn generate_content_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_generate_content_url_for_model() {
        let client = GeminiClient::new("key".to_string());

        let url = client.generate_content_url("gemini-2.0-flash");

        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        let client =
            GeminiClient::with_base_url("key".to_string(), "http://localhost:9000/v1/".to_string());

        assert_eq!(
            client.generate_content_url("m"),
            "http://localhost:9000/v1/models/m:generateContent"
        );
    }
}
