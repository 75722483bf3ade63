use std::path::Path;
use std::sync::Arc;

use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[async_trait::async_trait]
pub trait FileLoaderPort: Send + Sync {
    async fn load(&self, path: &Path) -> AppResult<LoadedFile>;
}

pub type DynFileLoaderPort = Arc<dyn FileLoaderPort>;
