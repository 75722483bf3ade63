use image::ImageFormat;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use imgconsole_application::{
    error::{AppError, AppResult},
    ports::outgoing::result_store::ResultStorePort,
};

/// Stores the returned image under the output directory. Only the most
/// recent result is kept: storing a new image removes the previously stored
/// file, so repeated submissions do not accumulate on disk.
pub struct FsResultStoreAdapter {
    directory: PathBuf,
    sequence: AtomicU64,
    last_stored: Mutex<Option<PathBuf>>,
}

impl FsResultStoreAdapter {
    #[must_use]
    pub fn new(directory: PathBuf) -> Self {
        Self {
            directory,
            sequence: AtomicU64::new(0),
            last_stored: Mutex::new(None),
        }
    }

    #[instrument(skip(self, bytes))]
    async fn store_image_impl(&self, bytes: &[u8], content_type: &str) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| AppError::ResultStore {
                message: format!("{}: {e}", self.directory.display()),
            })?;

        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
        let file_name = format!("processed-{sequence:04}.{}", extension_for(content_type));
        let path = self.directory.join(file_name);

        fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::ResultStore {
                message: format!("{}: {e}", path.display()),
            })?;

        debug!("Stored {} bytes at {}", bytes.len(), path.display());

        let mut last = self.last_stored.lock().await;
        if let Some(previous) = last.replace(path.clone()) {
            if previous != path {
                if let Err(e) = fs::remove_file(&previous).await {
                    warn!("Failed to release {}: {}", previous.display(), e);
                }
            }
        }

        Ok(path)
    }
}

#[async_trait::async_trait]
impl ResultStorePort for FsResultStoreAdapter {
    async fn store_image(&self, bytes: &[u8], content_type: &str) -> AppResult<PathBuf> {
        self.store_image_impl(bytes, content_type).await
    }
}

fn extension_for(content_type: &str) -> &'static str {
    ImageFormat::from_mime_type(content_type)
        .and_then(|format| format.extensions_str().first().copied())
        .unwrap_or("bin")
}
