use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, StatusCode};
use std::sync::Arc;
use tracing::{debug, instrument};
use url::Url;

use domain::endpoint::HttpMethod;
use domain::result::ApiOutcome;
use imgconsole_application::{
    config::ClientSettings,
    error::{AppError, AppResult},
    ports::outgoing::{
        image_service::{ApiRequest, FilePart, ImageServicePort},
        progress::DynProgressSinkPort,
    },
};

use super::progress_body::progress_chunks;

/// HTTP adapter for the remote image-manipulation service: serializes a
/// request as multipart/form-data, streams the file part so upload progress
/// can be observed, and maps the response into an [`ApiOutcome`].
pub struct ReqwestImageServiceAdapter {
    http: Client,
    base_url: Url,
    upload_chunk_bytes: usize,
}

impl ReqwestImageServiceAdapter {
    pub fn new(settings: &ClientSettings) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| AppError::ConfigError {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            base_url: settings.base_url.clone(),
            upload_chunk_bytes: settings.upload_chunk_bytes,
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AppError::ConfigError {
                message: "base_url cannot be used as a base address".to_string(),
            })?
            .pop_if_empty()
            .push(endpoint);
        Ok(url)
    }

    #[instrument(skip(self, request, progress), fields(endpoint = %request.endpoint))]
    async fn submit_impl(
        &self,
        request: ApiRequest,
        progress: DynProgressSinkPort,
    ) -> AppResult<ApiOutcome> {
        let url = self.endpoint_url(&request.endpoint)?;
        let method = request.method;

        let response = match method {
            HttpMethod::Get => self.http.get(url).send().await,
            HttpMethod::Post => {
                let form = self.build_form(request, Arc::clone(&progress))?;
                self.http.post(url).multipart(form).send().await
            }
        };

        // The request has resolved either way; the indicator can complete.
        progress.finish();

        let response = response.map_err(|e| AppError::Transport {
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                status_text: status_text(status),
            });
        }

        debug!("Endpoint responded {}", status);

        match method {
            HttpMethod::Get => {
                let body = response.text().await.map_err(|e| AppError::Transport {
                    message: e.to_string(),
                })?;
                Ok(ApiOutcome::Listing { body })
            }
            HttpMethod::Post => {
                let content_type = response
                    .headers()
                    .get(CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = response.bytes().await.map_err(|e| AppError::Transport {
                    message: e.to_string(),
                })?;
                Ok(ApiOutcome::Image {
                    bytes: bytes.to_vec(),
                    content_type,
                })
            }
        }
    }

    fn build_form(&self, request: ApiRequest, progress: DynProgressSinkPort) -> AppResult<Form> {
        let mut form = Form::new();

        // File part first, matching the form's field order.
        if let Some(file) = request.file_part {
            let FilePart {
                field_name,
                file_name,
                mime,
                bytes,
            } = file;
            let length = bytes.len() as u64;
            let stream = progress_chunks(Bytes::from(bytes), self.upload_chunk_bytes, progress);
            let part = Part::stream_with_length(Body::wrap_stream(stream), length)
                .file_name(file_name)
                .mime_str(&mime)
                .map_err(|e| AppError::Transport {
                    message: format!("Invalid mime type {mime}: {e}"),
                })?;
            form = form.part(field_name, part);
        }

        for (name, value) in request.text_parts {
            form = form.text(name, value);
        }

        Ok(form)
    }
}

#[async_trait::async_trait]
impl ImageServicePort for ReqwestImageServiceAdapter {
    async fn submit(
        &self,
        request: ApiRequest,
        progress: DynProgressSinkPort,
    ) -> AppResult<ApiOutcome> {
        self.submit_impl(request, progress).await
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.to_string(), ToString::to_string)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn adapter(base: &str) -> ReqwestImageServiceAdapter {
        let settings = ClientSettings {
            base_url: Url::parse(base).unwrap(),
            request_timeout: Duration::from_secs(5),
            upload_chunk_bytes: 1024,
        };
        ReqwestImageServiceAdapter::new(&settings).unwrap()
    }

    #[test]
    fn endpoint_urls_join_onto_the_base_path() {
        let plain = adapter("http://localhost:8000");
        assert_eq!(
            plain.endpoint_url("resize").unwrap().as_str(),
            "http://localhost:8000/resize"
        );

        let nested = adapter("http://api.example.com/v1/images/");
        assert_eq!(
            nested.endpoint_url("list_fonts").unwrap().as_str(),
            "http://api.example.com/v1/images/list_fonts"
        );
    }

    #[test]
    fn status_text_prefers_the_canonical_reason() {
        assert_eq!(
            status_text(StatusCode::INTERNAL_SERVER_ERROR),
            "Internal Server Error"
        );
        let exotic = StatusCode::from_u16(599).unwrap();
        assert!(status_text(exotic).contains("599"));
    }
}
