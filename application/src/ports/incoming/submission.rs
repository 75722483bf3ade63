use std::path::Path;

use crate::error::AppResult;
use domain::result::{ImagePreview, RenderedResult};
use domain::submission::Submission;

#[async_trait::async_trait]
pub trait SubmitUseCase: Send + Sync {
    async fn submit(&self, submission: Submission) -> AppResult<RenderedResult>;
}

#[async_trait::async_trait]
pub trait PreviewUseCase: Send + Sync {
    async fn preview(&self, path: &Path) -> AppResult<ImagePreview>;
}
