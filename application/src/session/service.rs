use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument, warn};

use domain::{
    field::{FieldKind, FieldValue},
    form::{FormSchema, FormValues},
    result::{ApiOutcome, ImagePreview, RenderedResult},
    submission::Submission,
};

use crate::{
    error::{AppError, AppResult},
    forms::service::FormService,
    ports::{
        incoming::submission::{PreviewUseCase, SubmitUseCase},
        outgoing::{
            file_loader::DynFileLoaderPort,
            image_service::{ApiRequest, DynImageServicePort, FilePart},
            preview_probe::DynPreviewProbePort,
            progress::DynProgressSinkPort,
            result_store::DynResultStorePort,
        },
    },
};

use super::state::UiState;

pub struct SessionServiceDeps {
    pub image_service: DynImageServicePort,
    pub file_loader: DynFileLoaderPort,
    pub preview_probe: DynPreviewProbePort,
    pub result_store: DynResultStorePort,
    pub progress: DynProgressSinkPort,
}

/// The session controller: owns the UI state and sequences every transition.
/// A submission while another is in flight is rejected, never queued.
pub struct SessionService {
    form_service: Arc<FormService>,
    image_service: DynImageServicePort,
    file_loader: DynFileLoaderPort,
    preview_probe: DynPreviewProbePort,
    result_store: DynResultStorePort,
    progress: DynProgressSinkPort,
    in_flight: AtomicBool,
    state: Mutex<UiState>,
}

impl SessionService {
    #[must_use]
    pub fn new(form_service: Arc<FormService>, deps: SessionServiceDeps) -> Arc<Self> {
        Arc::new(Self {
            form_service,
            image_service: deps.image_service,
            file_loader: deps.file_loader,
            preview_probe: deps.preview_probe,
            result_store: deps.result_store,
            progress: deps.progress,
            in_flight: AtomicBool::new(false),
            state: Mutex::new(UiState::default()),
        })
    }

    /// Marks the endpoint as the active menu entry and returns its form.
    pub fn select_endpoint(&self, endpoint_name: &str) -> FormSchema {
        if let Ok(mut state) = self.state.lock() {
            state.selected = Some(endpoint_name.to_string());
        }
        self.form_service.build_form(endpoint_name)
    }

    #[must_use]
    pub fn ui_state(&self) -> UiState {
        self.state.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Probes the selected file for the live preview. Failure here is
    /// reported to the caller but never blocks submission, which re-reads
    /// the file independently.
    #[instrument(skip(self))]
    pub async fn preview(&self, path: &Path) -> AppResult<ImagePreview> {
        let loaded = self.file_loader.load(path).await?;
        let preview = self.preview_probe.probe(&loaded.bytes)?;
        if let Ok(mut state) = self.state.lock() {
            state.last_preview = Some(preview);
        }
        Ok(preview)
    }

    /// Runs one submission end to end: validate, serialize, send, render.
    /// Transport and HTTP failures become an error-kind result; validation
    /// failures are returned as errors before any network activity.
    #[instrument(
        skip(self, submission),
        fields(endpoint = %submission.endpoint, submitted_at = %submission.submitted_at)
    )]
    pub async fn submit(&self, submission: Submission) -> AppResult<RenderedResult> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AppError::SubmissionInFlight);
        }

        let result = self.perform(&submission).await;
        self.in_flight.store(false, Ordering::SeqCst);

        let rendered = result?;
        if let Ok(mut state) = self.state.lock() {
            state.last_result = Some(rendered.clone());
        }
        Ok(rendered)
    }

    async fn perform(&self, submission: &Submission) -> AppResult<RenderedResult> {
        let schema = self.form_service.build_form(&submission.endpoint);
        schema
            .validate(&submission.values)
            .map_err(|e| AppError::Validation {
                message: e.to_string(),
            })?;

        self.progress.report(0);
        let request = self.build_request(&schema, &submission.values).await?;

        debug!(
            "Submitting {} ({} text parts, file: {})",
            submission.endpoint,
            request.text_parts.len(),
            request.file_part.is_some()
        );

        match self
            .image_service
            .submit(request, Arc::clone(&self.progress))
            .await
        {
            Ok(outcome) => self.render_outcome(outcome).await,
            Err(error @ (AppError::Transport { .. } | AppError::HttpStatus { .. })) => {
                warn!("Submission to {} failed: {}", submission.endpoint, error);
                Ok(RenderedResult::Error {
                    message: error.to_string(),
                })
            }
            Err(error) => Err(error),
        }
    }

    async fn build_request(
        &self,
        schema: &FormSchema,
        values: &FormValues,
    ) -> AppResult<ApiRequest> {
        let mut text_parts = Vec::new();
        let mut file_part = None;

        for field in &schema.fields {
            match &field.kind {
                FieldKind::File => {
                    let path =
                        values
                            .file_path(&field.name)
                            .ok_or_else(|| AppError::Validation {
                                message: format!("field {} carries no file path", field.name),
                            })?;
                    let loaded = self.file_loader.load(path).await?;
                    file_part = Some(FilePart {
                        field_name: field.name.clone(),
                        file_name: loaded.file_name,
                        mime: loaded.mime,
                        bytes: loaded.bytes,
                    });
                }
                FieldKind::Select { .. } => {
                    let value = values
                        .get(&field.name)
                        .and_then(FieldValue::as_part_value)
                        .or_else(|| field.default_option().map(ToString::to_string));
                    if let Some(value) = value {
                        text_parts.push((field.name.clone(), value));
                    }
                }
                FieldKind::Number | FieldKind::Text => {
                    if let Some(value) = values.get(&field.name).and_then(FieldValue::as_part_value)
                    {
                        text_parts.push((field.name.clone(), value));
                    }
                }
            }
        }

        Ok(ApiRequest {
            endpoint: schema.endpoint.clone(),
            method: schema.method,
            text_parts,
            file_part,
        })
    }

    async fn render_outcome(&self, outcome: ApiOutcome) -> AppResult<RenderedResult> {
        match outcome {
            ApiOutcome::Image {
                bytes,
                content_type,
            } => {
                let path = self.result_store.store_image(&bytes, &content_type).await?;
                Ok(RenderedResult::Image { path })
            }
            ApiOutcome::Listing { body } => Ok(RenderedResult::Listing {
                body: prettify_listing(&body),
            }),
        }
    }
}

/// Fonts listings are structured when the server cooperates; anything that
/// fails to parse as JSON is passed through verbatim.
fn prettify_listing(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| body.to_string())
}

#[async_trait::async_trait]
impl SubmitUseCase for SessionService {
    async fn submit(&self, submission: Submission) -> AppResult<RenderedResult> {
        self.submit(submission).await
    }
}

#[async_trait::async_trait]
impl PreviewUseCase for SessionService {
    async fn preview(&self, path: &Path) -> AppResult<ImagePreview> {
        self.preview(path).await
    }
}
