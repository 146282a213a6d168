//! Environment configuration for the generation backend

use super::{ConfigError, GeminiService, LlmService, LoggingService};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Gemini accepts sampling temperatures in this range
const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

/// Load `dir/.env` into the process environment.
///
/// Variables already set in the environment take precedence. Returns the
/// loaded path, or `None` when there is no file.
pub fn load_dotenv_from(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(".env");
    match dotenvy::from_path(&path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "Loaded environment file");
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to load environment file");
            None
        }
    }
}

/// Configuration for the LLM provider
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub gemini_api_key: Option<String>,
    /// Gateway URL; when set the gateway handles authentication
    pub gateway: Option<String>,
    pub model: String,
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gateway: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let temperature = match get("TEMPERATURE") {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|t| TEMPERATURE_RANGE.contains(t))
                .unwrap_or_else(|| {
                    tracing::warn!(value = %raw, "Ignoring unusable TEMPERATURE");
                    DEFAULT_TEMPERATURE
                }),
            None => DEFAULT_TEMPERATURE,
        };

        Self {
            gemini_api_key: get("GEMINI_API_KEY"),
            gateway: get("LLM_GATEWAY"),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature,
        }
    }

    /// Create the logging-wrapped service this configuration describes
    pub fn build_service(&self) -> Result<Arc<dyn LlmService>, ConfigError> {
        // In gateway mode, use "implicit" as the API key
        let api_key = match (&self.gateway, &self.gemini_api_key) {
            (Some(_), _) => "implicit".to_string(),
            (None, Some(key)) => key.clone(),
            (None, None) => return Err(ConfigError::MissingApiKey),
        };

        let service = GeminiService::new(api_key, &self.model, self.gateway.as_deref())?;
        tracing::debug!(url = %service.url(), "Gemini endpoint");
        Ok(Arc::new(LoggingService::new(Arc::new(service))))
    }
}
