use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Where the remote image-manipulation service lives and how uploads to it
/// behave. The base URL is externally supplied; endpoint names are joined
/// onto it as path segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub upload_chunk_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory where processed images returned by the service are stored.
    pub directory: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                request_timeout_secs: 120,
                upload_chunk_bytes: 64 * 1024,
            },
            output: OutputConfig {
                directory: "processed".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "base_url cannot be empty".to_string(),
            });
        }

        let parsed = Url::parse(&self.api.base_url).map_err(|e| AppError::ConfigError {
            message: format!("base_url is not a valid URL: {e}"),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(AppError::ConfigError {
                message: "base_url cannot be used as a base address".to_string(),
            });
        }

        if self.api.request_timeout_secs == 0 {
            return Err(AppError::ConfigError {
                message: "request_timeout_secs must be greater than 0".to_string(),
            });
        }

        if self.api.upload_chunk_bytes == 0 {
            return Err(AppError::ConfigError {
                message: "upload_chunk_bytes must be greater than 0".to_string(),
            });
        }

        if self.output.directory.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "output directory cannot be empty".to_string(),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "logging level cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
