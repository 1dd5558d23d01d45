use super::{cors_config, server_config::ServerConfig, ui_config::UiConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub ui: UiConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            ui: UiConfig::from_env(),
        }
    }
}
