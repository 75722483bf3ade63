use image::ImageFormat;
use std::ffi::OsStr;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};

use imgconsole_application::{
    error::{AppError, AppResult},
    ports::outgoing::file_loader::{FileLoaderPort, LoadedFile},
};

/// Reads the selected image file from disk. The mime type is guessed from
/// the file extension; files the `image` crate does not recognize fall back
/// to an opaque octet stream.
pub struct TokioFileLoaderAdapter;

impl TokioFileLoaderAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self))]
    async fn load_impl(&self, path: &Path) -> AppResult<LoadedFile> {
        let bytes = fs::read(path).await.map_err(|e| AppError::FileRead {
            message: format!("{}: {e}", path.display()),
        })?;

        let file_name = path
            .file_name()
            .and_then(OsStr::to_str)
            .map_or_else(|| "upload.bin".to_string(), ToString::to_string);

        let mime = ImageFormat::from_path(path).map_or_else(
            |_| "application/octet-stream".to_string(),
            |format| format.to_mime_type().to_string(),
        );

        debug!("Loaded {} ({} bytes, {})", file_name, bytes.len(), mime);

        Ok(LoadedFile {
            file_name,
            mime,
            bytes,
        })
    }
}

impl Default for TokioFileLoaderAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FileLoaderPort for TokioFileLoaderAdapter {
    async fn load(&self, path: &Path) -> AppResult<LoadedFile> {
        self.load_impl(path).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    #[tokio::test]
    async fn loads_bytes_and_guesses_the_mime_from_the_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std_fs::write(&path, b"not really a png").unwrap();

        let loaded = TokioFileLoaderAdapter::new().load(&path).await.unwrap();
        assert_eq!(loaded.file_name, "photo.png");
        assert_eq!(loaded.mime, "image/png");
        assert_eq!(loaded.bytes, b"not really a png");
    }

    #[tokio::test]
    async fn unknown_extensions_fall_back_to_octet_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.xyz");
        std_fs::write(&path, b"data").unwrap();

        let loaded = TokioFileLoaderAdapter::new().load(&path).await.unwrap();
        assert_eq!(loaded.mime, "application/octet-stream");
    }

    #[tokio::test]
    async fn missing_files_surface_a_read_error() {
        let result = TokioFileLoaderAdapter::new()
            .load(Path::new("/nonexistent/cat.png"))
            .await;
        assert!(matches!(result, Err(AppError::FileRead { .. })));
    }
}
