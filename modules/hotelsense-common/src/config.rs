use std::env;
use std::path::PathBuf;

use tracing::info;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_RAPIDAPI_HOST: &str = "hotels-com-provider.p.rapidapi.com";
pub const DEFAULT_DATA_DIR: &str = ".hotelsense";

/// Application configuration loaded from environment variables.
///
/// API keys are optional: a missing key turns off the tier that needs it
/// and the chain starts at the next one.
#[derive(Debug, Clone)]
pub struct Config {
    // Generative model
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,

    // Hotel listings
    pub rapidapi_key: Option<String>,
    pub rapidapi_host: String,

    // Local storage
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            rapidapi_key: get("RAPIDAPI_KEY"),
            rapidapi_host: get("RAPIDAPI_HOST")
                .unwrap_or_else(|| DEFAULT_RAPIDAPI_HOST.to_string()),
            data_dir: get("HOTELSENSE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        }
    }

    /// Log the effective configuration with secrets masked.
    pub fn log_redacted(&self) {
        info!(
            gemini_api_key = redact(self.gemini_api_key.as_deref()),
            gemini_model = self.gemini_model.as_str(),
            rapidapi_key = redact(self.rapidapi_key.as_deref()),
            rapidapi_host = self.rapidapi_host.as_str(),
            data_dir = %self.data_dir.display(),
            "Loaded configuration"
        );
    }
}

fn redact(secret: Option<&str>) -> &'static str {
    match secret {
        Some(_) => "[set]",
        None => "[unset]",
    }
}
