use std::path::PathBuf;
use std::sync::Arc;

use crate::error::AppResult;

/// Owns the display resource for the live image result. Storing a new image
/// releases the previously stored one; only one stored result exists at a
/// time.
#[async_trait::async_trait]
pub trait ResultStorePort: Send + Sync {
    async fn store_image(&self, bytes: &[u8], content_type: &str) -> AppResult<PathBuf>;
}

pub type DynResultStorePort = Arc<dyn ResultStorePort>;
