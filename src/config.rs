use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";
const DEFAULT_INSTRUCTIONS_URL: &str = "/INSTRUCTIONS.md";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub instructions_url: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            instructions_url: DEFAULT_INSTRUCTIONS_URL.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    /// (see `build.rs` for the `.env` forwarding).
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("INSTRUCTIONS_URL"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        api_url: Option<&str>,
        instructions_url: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_url),
            instructions_url: instructions_url
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.instructions_url),
            enable_logging: enable_logging
                .and_then(|flag| flag.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Builds the absolute URL of a backend endpoint, e.g. `endpoint("login")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Level handed to `wasm_logger`. Logging disabled still lets errors through.
    pub fn logger_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
