use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Whether a system instruction is sent with every prompt
    pub system_instruction: bool,
}

/// Health API for liveness checks.
pub struct Api {
    system_instruction: bool,
}

impl Api {
    pub fn new(system_instruction: bool) -> Self {
        Self { system_instruction }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Does not touch the model; only reports that the process is serving.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            system_instruction: self.system_instruction,
        })
    }
}
