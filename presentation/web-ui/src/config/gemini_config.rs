use std::env;
use std::path::Path;

use anyhow::{Context, bail};

use business::domain::completion::value_objects::{ModelId, SystemInstruction};
use gemini::client::DEFAULT_BASE_URL;

/// Configuration for Gemini API access.
///
/// Environment variables:
/// - GEMINI_API_KEY: API key (required, startup fails without it)
/// - GEMINI_MODEL: model id (default: "gemini-2.0-flash")
/// - GEMINI_BASE_URL: API root (default: public v1beta endpoint)
/// - SYSTEM_INSTRUCTION_FILE: file whose content is sent as system instruction
/// - SYSTEM_INSTRUCTION: inline system instruction, used when no file is given
pub struct GeminiConfig {
    pub api_key: String,
    pub model: ModelId,
    pub base_url: String,
    pub system_instruction: Option<SystemInstruction>,
}

impl GeminiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let set = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let Some(api_key) = set("GEMINI_API_KEY") else {
            bail!("GEMINI_API_KEY environment variable must be set");
        };

        let system_instruction = match set("SYSTEM_INSTRUCTION_FILE") {
            Some(path) => Some(read_instruction_file(Path::new(&path))?),
            None => set("SYSTEM_INSTRUCTION").map(SystemInstruction::from),
        };

        Ok(Self {
            api_key,
            model: set("GEMINI_MODEL").map(ModelId::new).unwrap_or_default(),
            base_url: set("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            system_instruction,
        })
    }
}

fn read_instruction_file(path: &Path) -> anyhow::Result<SystemInstruction> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading SYSTEM_INSTRUCTION_FILE {}", path.display()))?;
    Ok(SystemInstruction::from(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_fail_when_api_key_is_missing() {
        let result = GeminiConfig::from_lookup(lookup_from(&[("GEMINI_MODEL", "x")]));

        let err = result.err().unwrap();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn should_fail_when_api_key_is_empty() {
        let result = GeminiConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "")]));

        assert!(result.is_err());
    }

    #[test]
    fn should_use_defaults_for_plain_variant() {
        let config = GeminiConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "k")])).unwrap();

        assert_eq!(config.api_key, "k");
        assert_eq!(config.model.as_str(), "gemini-2.0-flash");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.system_instruction.is_none());
    }

    #[test]
    fn should_read_inline_instruction_and_model() {
        let config = GeminiConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("SYSTEM_INSTRUCTION", "Reply in Japanese."),
        ]))
        .unwrap();

        assert_eq!(config.model.as_str(), "gemini-1.5-pro");
        assert_eq!(
            config.system_instruction.unwrap().as_str(),
            "Reply in Japanese."
        );
    }

    #[test]
    fn should_prefer_instruction_file_over_inline_text() {
        let path = env::temp_dir().join(format!("instruction-{}.txt", std::process::id()));
        std::fs::write(&path, "from file\n").unwrap();
        let path_str = path.to_string_lossy().to_string();

        let config = GeminiConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("SYSTEM_INSTRUCTION", "inline"),
            ("SYSTEM_INSTRUCTION_FILE", path_str.as_str()),
        ]))
        .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.system_instruction.unwrap().as_str(), "from file\n");
    }

    #[test]
    fn should_fail_when_instruction_file_is_missing() {
        let result = GeminiConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("SYSTEM_INSTRUCTION_FILE", "/nonexistent/instruction.txt"),
        ]));

        assert!(result.is_err());
    }
}
