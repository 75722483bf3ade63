use image::ImageReader;
use std::io::Cursor;
use tracing::debug;

use domain::result::{ImageFormatName, ImagePreview};
use imgconsole_application::{
    error::{AppError, AppResult},
    ports::outgoing::preview_probe::PreviewProbePort,
};

/// Builds preview metadata by sniffing the format and reading the header
/// dimensions; the pixel data is never fully decoded.
pub struct ImagePreviewProbeAdapter;

impl ImagePreviewProbeAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn probe_impl(&self, bytes: &[u8]) -> AppResult<ImagePreview> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| AppError::FileRead {
                message: format!("Failed to sniff image format: {e}"),
            })?;

        let format = reader.format().ok_or_else(|| AppError::FileRead {
            message: "Unrecognized image format".to_string(),
        })?;

        let (width, height) = reader.into_dimensions().map_err(|e| AppError::FileRead {
            message: format!("Failed to read image dimensions: {e}"),
        })?;

        debug!("Probed {width}x{height} {:?} preview", format);

        Ok(ImagePreview {
            width,
            height,
            format: ImageFormatName(format.extensions_str().first().copied().unwrap_or("img")),
            byte_len: bytes.len(),
        })
    }
}

impl Default for ImagePreviewProbeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewProbePort for ImagePreviewProbeAdapter {
    fn probe(&self, bytes: &[u8]) -> AppResult<ImagePreview> {
        self.probe_impl(bytes)
    }
}
