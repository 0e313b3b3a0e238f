use crate::{ConfigError, ConfigErrorResult, DEFAULT_CORS_ALLOWED_ORIGIN};

use serde::Deserialize;

/// Cross-origin policy: exactly one browser origin may call the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Scheme + host (+ optional port), e.g. `http://localhost:3000`
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: String::from(DEFAULT_CORS_ALLOWED_ORIGIN),
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let origin = self.allowed_origin.as_str();

        let authority = origin
            .strip_prefix("http://")
            .or_else(|| origin.strip_prefix("https://"))
            .ok_or_else(|| {
                ConfigError::cors(format!(
                    "cors.allowed_origin must start with http:// or https://, got '{}'",
                    origin
                ))
            })?;

        if authority.is_empty()
            || authority.contains('/')
            || authority.chars().any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ConfigError::cors(format!(
                "cors.allowed_origin must be a bare origin without path, got '{}'",
                origin
            )));
        }

        Ok(())
    }
}
