use std::env;

pub const DEFAULT_TITLE: &str = "私のAIアプリ";

/// Settings for the HTML page served at `/`.
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub title: String,
}

impl UiConfig {
    /// Environment variables:
    /// - APP_TITLE: page heading (default: "私のAIアプリ")
    pub fn from_env() -> Self {
        Self {
            title: env::var("APP_TITLE")
                .ok()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        }
    }
}
