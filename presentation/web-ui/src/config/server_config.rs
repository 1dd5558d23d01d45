use std::env;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            ip: lookup("SERVICE_IP").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("SERVICE_PORT").unwrap_or_else(|| "8080".to_string()),
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        let config = ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: "8501".to_string(),
        };

        assert_eq!(config.bind_address(), "0.0.0.0:8501");
    }

    #[test]
    fn should_fall_back_to_localhost_8080() {
        let config = ServerConfig::from_lookup(|_| None);

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
