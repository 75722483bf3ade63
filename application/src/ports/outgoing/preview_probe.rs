use std::sync::Arc;

use crate::error::AppResult;
use domain::result::ImagePreview;

/// Inspects raw file bytes and produces preview metadata without a full
/// decode.
pub trait PreviewProbePort: Send + Sync {
    fn probe(&self, bytes: &[u8]) -> AppResult<ImagePreview>;
}

pub type DynPreviewProbePort = Arc<dyn PreviewProbePort>;
