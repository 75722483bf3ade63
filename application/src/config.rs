use std::time::Duration;
use url::Url;

use crate::error::{AppError, AppResult};
use crate::infrastructure_config::Config;

/// Runtime view of the API configuration with the base URL already parsed.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    pub request_timeout: Duration,
    pub upload_chunk_bytes: usize,
}

impl ClientSettings {
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let base_url = Url::parse(&config.api.base_url).map_err(|e| AppError::ConfigError {
            message: format!("base_url is not a valid URL: {e}"),
        })?;

        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(config.api.request_timeout_secs),
            upload_chunk_bytes: config.api.upload_chunk_bytes,
        })
    }
}
